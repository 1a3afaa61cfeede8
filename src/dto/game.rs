use serde::{Deserialize, Deserializer, Serialize, de};

use crate::entities::{GameState, game};

// ============ Request DTOs ============

/// `GET /games/` query string.
///
/// `page` is 1-based. Missing `page`/`limit` fall back to 1 and the configured
/// default page size. Blank `title`/`platform`/`genre` values are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameFilterCriteria {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<u64>,
    /// `<field>[,asc|,desc]`, defaults to `updatedAt,desc`
    pub sort: Option<String>,
    pub title: Option<String>,
    pub platform: Option<String>,
    pub genre: Option<String>,
}

/// Form clients send `limit=` for an untouched field; treat it as absent.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("expected an integer, got '{value}'"))),
    }
}

// ============ Response DTOs ============

/// Catalog-wide number of games in each play state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatistics {
    pub backlog_count: u64,
    pub beat_count: u64,
    pub retired_count: u64,
    pub playing_count: u64,
}

impl GameStatistics {
    pub fn set(&mut self, state: GameState, count: u64) {
        match state {
            GameState::Backlog => self.backlog_count = count,
            GameState::Playing => self.playing_count = count,
            GameState::Beat => self.beat_count = count,
            GameState::Retired => self.retired_count = count,
        }
    }

    pub const fn total(&self) -> u64 {
        self.backlog_count + self.beat_count + self.retired_count + self.playing_count
    }
}

/// Game as returned by the API.
///
/// The four counters are flattened into the object on `GET /games/{id}` and
/// left out entirely on list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: String,
    pub title: String,
    pub platform: String,
    pub genre: String,
    pub state: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(flatten)]
    pub statistics: Option<GameStatistics>,
}

impl GameDto {
    #[must_use]
    pub fn with_statistics(mut self, statistics: GameStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }
}

impl From<game::Model> for GameDto {
    fn from(game: game::Model) -> Self {
        Self {
            id: game.id,
            title: game.title,
            platform: game.platform,
            genre: game.genre,
            state: game.state,
            created_at: game.created_at.to_rfc3339(),
            updated_at: game.updated_at.to_rfc3339(),
            statistics: None,
        }
    }
}
