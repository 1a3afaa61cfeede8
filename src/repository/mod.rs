//! Persistence boundary for the game catalog.

mod game_repository;
mod query;

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::dto::GameStatistics;
use crate::entities::{GameState, game};

pub use game_repository::SeaOrmGameRepository;
pub use query::{GameFilter, PageRequest, SortDirection, SortField, SortParseError, SortSpec};

/// Game storage.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Insert or overwrite (by id) every game as one unit. Returns the number of rows written.
    async fn save_all(&self, games: Vec<game::Model>) -> Result<u64, DbErr>;

    async fn find_by_id(&self, id: &str) -> Result<Option<game::Model>, DbErr>;

    /// Games where platform equals, genre equals, or the title contains
    /// (case-insensitively) the corresponding filter value.
    async fn find_filtered(
        &self,
        filter: &GameFilter,
        page: &PageRequest,
    ) -> Result<Vec<game::Model>, DbErr>;

    async fn count_by_state(&self, state: GameState) -> Result<u64, DbErr>;

    /// Per-state counts for the whole catalog in one query.
    async fn count_all_states(&self) -> Result<GameStatistics, DbErr>;
}
