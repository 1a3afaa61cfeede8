use std::sync::Arc;

use super::ServiceError;
use crate::config::Config;
use crate::dto::{GameDto, GameFilterCriteria};
use crate::entities::game;
use crate::loader::GameLoader;
use crate::repository::{GameFilter, GameRepository, PageRequest, SortSpec};

const SAVE_FAILED: &str = "The games could not be stored in the database.";
const GAME_NOT_FOUND: &str = "There is no game with the supplied id.";

/// Largest row offset a listing may start at; OFFSET is bound as a signed 64-bit value.
const MAX_OFFSET: u64 = i64::MAX.unsigned_abs();

/// Page size bounds for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub default_limit: u64,
    pub max_limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
        }
    }
}

impl From<&Config> for Pagination {
    fn from(config: &Config) -> Self {
        Self {
            default_limit: config.default_page_limit,
            max_limit: config.max_page_limit,
        }
    }
}

/// Catalog operations behind the `/games` endpoints.
pub struct GameService {
    repository: Arc<dyn GameRepository>,
    loader: Arc<dyn GameLoader>,
    pagination: Pagination,
}

impl GameService {
    pub fn new(
        repository: Arc<dyn GameRepository>,
        loader: Arc<dyn GameLoader>,
        pagination: Pagination,
    ) -> Self {
        Self {
            repository,
            loader,
            pagination,
        }
    }

    /// Import every game from the loader and store them as one unit.
    ///
    /// Returns the number of rows written.
    ///
    /// # Errors
    ///
    /// [`ServiceError::DataLoad`] if the source cannot be parsed (nothing is
    /// written), [`ServiceError::InvalidObject`] if the store rejects the batch.
    pub async fn load_games_from_csv(&self) -> Result<u64, ServiceError> {
        let games = self.loader.load_games().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Game import aborted");
        })?;

        let parsed = games.len();
        let stored = self.save_games(games).await?;
        tracing::info!(parsed, stored, "Games imported");

        Ok(stored)
    }

    /// # Errors
    ///
    /// [`ServiceError::InvalidObject`] if the store rejects any game.
    pub async fn save_games(&self, games: Vec<game::Model>) -> Result<u64, ServiceError> {
        self.repository.save_all(games).await.map_err(|e| {
            tracing::error!(error = %e, "Bulk save rejected by the database");
            ServiceError::InvalidObject(SAVE_FAILED.to_string())
        })
    }

    /// Look up one game and attach catalog-wide state counts.
    ///
    /// # Errors
    ///
    /// [`ServiceError::NotFound`] for an unknown id, [`ServiceError::Persistence`]
    /// if a query fails.
    pub async fn get_game_by_id(&self, id: &str) -> Result<GameDto, ServiceError> {
        let game = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(GAME_NOT_FOUND.to_string()))?;

        let statistics = self.repository.count_all_states().await?;
        tracing::debug!(id, total = statistics.total(), "Game found");

        Ok(GameDto::from(game).with_statistics(statistics))
    }

    /// One page of games matching `criteria`. List entries carry no counts.
    ///
    /// # Errors
    ///
    /// [`ServiceError::InvalidRequest`] for a zero page, a page whose offset
    /// does not fit the database, a limit outside `1..=max_limit` or an
    /// unknown sort; [`ServiceError::Persistence`] if the
    /// query fails.
    pub async fn get_filtered_games(
        &self,
        criteria: GameFilterCriteria,
    ) -> Result<Vec<GameDto>, ServiceError> {
        let page = criteria.page.unwrap_or(1);
        if page < 1 {
            return Err(ServiceError::InvalidRequest(
                "page must be at least 1".to_string(),
            ));
        }

        let limit = criteria.limit.unwrap_or(self.pagination.default_limit);
        if limit < 1 || limit > self.pagination.max_limit {
            return Err(ServiceError::InvalidRequest(format!(
                "limit must be between 1 and {}",
                self.pagination.max_limit
            )));
        }

        if (page - 1)
            .checked_mul(limit)
            .is_none_or(|offset| offset > MAX_OFFSET)
        {
            return Err(ServiceError::InvalidRequest(format!(
                "page {page} is out of range for limit {limit}"
            )));
        }

        let sort = criteria
            .sort
            .as_deref()
            .map(str::parse::<SortSpec>)
            .transpose()
            .map_err(|e| ServiceError::InvalidRequest(e.to_string()))?
            .unwrap_or_default();

        let request = PageRequest::new(page - 1, limit, sort);
        let filter = GameFilter::new(criteria.title, criteria.platform, criteria.genre);
        tracing::debug!(
            page,
            limit,
            %sort,
            title = ?filter.title,
            platform = ?filter.platform,
            genre = ?filter.genre,
            "Listing games"
        );

        let games = self.repository.find_filtered(&filter, &request).await?;
        Ok(games.into_iter().map(GameDto::from).collect())
    }
}
