use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::{GameLoader, LoadError};
use crate::entities::{GameState, game};

/// Loads the catalog from a UTF-8, comma-delimited CSV file with a header row.
///
/// Columns are matched by header name. `title`, `platform`, `genre` and
/// `state` are required; `id` and `updatedAt` may be missing or empty. Rows
/// without an id get a fresh UUID, rows without `updatedAt` get the load time.
#[derive(Debug, Clone)]
pub struct CsvGameLoader {
    path: PathBuf,
}

impl CsvGameLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl GameLoader for CsvGameLoader {
    async fn load_games(&self) -> Result<Vec<game::Model>, LoadError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;

        let games = parse_games_csv(&contents, Utc::now().fixed_offset())?;
        tracing::debug!(path = %self.path.display(), rows = games.len(), "Parsed games CSV");
        Ok(games)
    }
}

#[derive(Debug, Deserialize)]
struct CsvGameRow {
    #[serde(default)]
    id: Option<String>,
    title: String,
    platform: String,
    genre: String,
    state: String,
    #[serde(default, rename = "updatedAt", alias = "updated_at")]
    updated_at: Option<String>,
}

/// Parse games CSV content, stamping rows with `now` where the file has no timestamp.
///
/// # Errors
///
/// Returns the first [`LoadError`] found; no games are returned in that case.
pub fn parse_games_csv(
    content: &str,
    now: DateTime<FixedOffset>,
) -> Result<Vec<game::Model>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut games = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, result) in reader.deserialize::<CsvGameRow>().enumerate() {
        let row = index + 1;
        let record = result.map_err(|source| LoadError::Malformed { row, source })?;

        if record.title.is_empty() {
            return Err(LoadError::MissingTitle { row });
        }

        let state: GameState = record
            .state
            .parse()
            .map_err(|source| LoadError::InvalidState { row, source })?;

        // Stored in UTC so text-backed columns still order by instant.
        let updated_at = match non_empty(record.updated_at) {
            Some(value) => DateTime::parse_from_rfc3339(&value)
                .map_err(|source| LoadError::InvalidTimestamp {
                    row,
                    value: value.clone(),
                    source,
                })?
                .with_timezone(&Utc)
                .fixed_offset(),
            None => now,
        };

        let id = non_empty(record.id).unwrap_or_else(|| Uuid::new_v4().to_string());
        if !seen_ids.insert(id.clone()) {
            return Err(LoadError::DuplicateId { row, id });
        }

        games.push(game::Model {
            id,
            title: record.title,
            platform: record.platform,
            genre: record.genre,
            state: state.as_str().to_string(),
            created_at: now,
            updated_at,
        });
    }

    Ok(games)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00+00:00").unwrap_or_default()
    }

    #[test]
    fn test_parse_csv() {
        let csv = "\
id,title,platform,genre,state,updatedAt
g1,Hollow Knight,PC,Metroidvania,PLAYING,2024-03-01T12:00:00+00:00
g2, Celeste ,Switch,Platformer,beat,
";
        let games = parse_games_csv(csv, now()).unwrap_or_default();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].id, "g1");
        assert_eq!(games[0].state, "PLAYING");
        assert_eq!(games[0].updated_at.to_rfc3339(), "2024-03-01T12:00:00+00:00");
        assert_eq!(games[1].title, "Celeste");
        assert_eq!(games[1].state, "BEAT");
        assert_eq!(games[1].updated_at, now());
        assert_eq!(games[1].created_at, now());
    }

    #[test]
    fn test_timestamps_normalized_to_utc() {
        let csv = "\
id,title,platform,genre,state,updatedAt
early,Okami,PS2,Adventure,BEAT,2024-03-01T10:00:00+05:00
late,Ico,PS2,Adventure,BEAT,2024-03-01T06:00:00Z
";
        let games = parse_games_csv(csv, now()).unwrap_or_default();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].updated_at.to_rfc3339(), "2024-03-01T05:00:00+00:00");
        assert_eq!(games[1].updated_at.to_rfc3339(), "2024-03-01T06:00:00+00:00");
        assert!(games[0].updated_at.to_rfc3339() < games[1].updated_at.to_rfc3339());
    }

    #[test]
    fn test_optional_columns_may_be_absent() {
        let csv = "\
title,platform,genre,state
Outer Wilds,PC,Adventure,BACKLOG
Tetris,Game Boy,Puzzle,RETIRED
";
        let games = parse_games_csv(csv, now()).unwrap_or_default();

        assert_eq!(games.len(), 2);
        assert!(Uuid::parse_str(&games[0].id).is_ok());
        assert_ne!(games[0].id, games[1].id);
        assert_eq!(games[0].updated_at, now());
    }

    #[test]
    fn test_column_order_follows_header() {
        let csv = "state,genre,platform,title\nBEAT,RPG,PS1,Final Fantasy VII\n";
        let games = parse_games_csv(csv, now()).unwrap_or_default();

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].title, "Final Fantasy VII");
        assert_eq!(games[0].platform, "PS1");
    }

    #[test]
    fn test_unknown_state_fails_whole_load() {
        let csv = "\
title,platform,genre,state
Doom,PC,Shooter,PLAYING
Quake,PC,Shooter,ABANDONED
";
        let err = parse_games_csv(csv, now()).err();

        assert!(matches!(err, Some(LoadError::InvalidState { row: 2, .. })));
    }

    #[test]
    fn test_blank_title_rejected() {
        let csv = "title,platform,genre,state\n  ,PC,Shooter,PLAYING\n";

        assert!(matches!(
            parse_games_csv(csv, now()),
            Err(LoadError::MissingTitle { row: 1 })
        ));
    }

    #[test]
    fn test_missing_required_column_is_malformed() {
        let csv = "title,platform,genre\nDoom,PC,Shooter\n";

        assert!(matches!(
            parse_games_csv(csv, now()),
            Err(LoadError::Malformed { row: 1, .. })
        ));
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let csv = "title,platform,genre,state\nDoom,PC,Shooter\n";

        assert!(matches!(
            parse_games_csv(csv, now()),
            Err(LoadError::Malformed { .. })
        ));
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        let csv = "title,platform,genre,state,updatedAt\nDoom,PC,Shooter,BEAT,yesterday\n";
        let err = parse_games_csv(csv, now()).err();

        assert!(matches!(err, Some(LoadError::InvalidTimestamp { row: 1, .. })));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let csv = "\
id,title,platform,genre,state
a,Doom,PC,Shooter,BEAT
a,Quake,PC,Shooter,BEAT
";
        let err = parse_games_csv(csv, now()).err();

        assert!(matches!(err, Some(LoadError::DuplicateId { row: 2, .. })));
    }

    #[test]
    fn test_header_only_yields_nothing() {
        let games = parse_games_csv("title,platform,genre,state\n", now()).unwrap_or_default();
        assert!(games.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let loader = CsvGameLoader::new("does/not/exist.csv");
        let err = loader.load_games().await.err();

        assert!(matches!(err, Some(LoadError::Io { .. })));
    }
}
