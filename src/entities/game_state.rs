use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Play-progress category of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameState {
    /// Owned but not started
    #[default]
    Backlog,
    /// Currently being played
    Playing,
    /// Finished
    Beat,
    /// Abandoned for good
    Retired,
}

/// Returned when a string is not one of the four state names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game state '{0}' (expected BACKLOG, PLAYING, BEAT or RETIRED)")]
pub struct UnknownGameState(pub String);

impl GameState {
    pub const ALL: [Self; 4] = [Self::Backlog, Self::Playing, Self::Beat, Self::Retired];

    /// Database and wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "BACKLOG",
            Self::Playing => "PLAYING",
            Self::Beat => "BEAT",
            Self::Retired => "RETIRED",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameState {
    type Err = UnknownGameState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BACKLOG" => Ok(Self::Backlog),
            "PLAYING" => Ok(Self::Playing),
            "BEAT" => Ok(Self::Beat),
            "RETIRED" => Ok(Self::Retired),
            _ => Err(UnknownGameState(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("BACKLOG".parse(), Ok(GameState::Backlog));
        assert_eq!("playing".parse(), Ok(GameState::Playing));
        assert_eq!(" Beat ".parse(), Ok(GameState::Beat));
        assert_eq!("RETIRED".parse(), Ok(GameState::Retired));
        assert!("finished".parse::<GameState>().is_err());
        assert!("".parse::<GameState>().is_err());
    }

    #[test]
    fn test_as_str_round_trips_through_from_str() {
        for state in GameState::ALL {
            assert_eq!(state.as_str().parse(), Ok(state));
        }
    }

    #[test]
    fn test_serializes_upper_case() {
        let json = serde_json::to_string(&GameState::Playing).unwrap_or_default();
        assert_eq!(json, "\"PLAYING\"");
    }

    #[test]
    fn test_default() {
        assert_eq!(GameState::default(), GameState::Backlog);
    }
}
