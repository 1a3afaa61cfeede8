//! Catalog import sources.
//!
//! A [`GameLoader`] produces a fully materialized list of games ready to be
//! stored. Loading is all-or-nothing: any bad row fails the whole load.

mod csv_loader;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::entities::{UnknownGameState, game};

pub use csv_loader::{CsvGameLoader, parse_games_csv};

/// Source of games for a bulk import.
#[async_trait]
pub trait GameLoader: Send + Sync {
    async fn load_games(&self) -> Result<Vec<game::Model>, LoadError>;
}

/// Why an import file could not be turned into games.
///
/// `row` is the 1-based data row, not counting the header.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("row {row}: malformed CSV: {source}")]
    Malformed {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("row {row}: title is required")]
    MissingTitle { row: usize },
    #[error("row {row}: {source}")]
    InvalidState {
        row: usize,
        #[source]
        source: UnknownGameState,
    },
    #[error("row {row}: invalid updatedAt '{value}', expected RFC 3339")]
    InvalidTimestamp {
        row: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("row {row}: duplicate id '{id}'")]
    DuplicateId { row: usize, id: String },
}
