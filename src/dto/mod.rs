pub mod game;

pub use game::{GameDto, GameFilterCriteria, GameStatistics};
