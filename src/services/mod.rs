mod error;
mod game_service;

pub use error::ServiceError;
pub use game_service::{GameService, Pagination};
