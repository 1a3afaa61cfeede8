use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::loader::CsvGameLoader;
use crate::repository::SeaOrmGameRepository;
use crate::services::{GameService, Pagination};

/// Shared application state available to all request handlers via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub games: Arc<GameService>,
}

impl AppState {
    /// Wire the game service to the database and the configured CSV file.
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        let games = GameService::new(
            Arc::new(SeaOrmGameRepository::new(db.clone())),
            Arc::new(CsvGameLoader::new(config.csv_path.clone())),
            Pagination::from(config),
        );

        Self {
            db,
            games: Arc::new(games),
        }
    }
}
