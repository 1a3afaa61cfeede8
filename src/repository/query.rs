use std::fmt;
use std::str::FromStr;

/// Title/platform/genre filter, combined with OR.
///
/// Blank values are dropped on construction, so a field only takes part in
/// the query when the caller actually supplied text for it. With no field
/// left the filter matches every game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameFilter {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Exact platform
    pub platform: Option<String>,
    /// Exact genre
    pub genre: Option<String>,
}

impl GameFilter {
    pub fn new(title: Option<String>, platform: Option<String>, genre: Option<String>) -> Self {
        Self {
            title: present(title),
            platform: present(platform),
            genre: present(genre),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.platform.is_none() && self.genre.is_none()
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Columns a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    UpdatedAt,
    Title,
    Platform,
    Genre,
    State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Ordering of a listing, parsed from `<field>[,asc|,desc]`.
///
/// The default is most recently updated first. Naming a field without a
/// direction sorts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortParseError {
    #[error("unknown sort field '{0}' (expected updatedAt, title, platform, genre or state)")]
    UnknownField(String),
    #[error("unknown sort direction '{0}' (expected asc or desc)")]
    UnknownDirection(String),
}

impl FromStr for SortSpec {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::default());
        }

        let (field, direction) = match s.split_once(',') {
            Some((field, direction)) => (field.trim(), Some(direction.trim())),
            None => (s, None),
        };

        let field = match field.to_lowercase().as_str() {
            "updatedat" | "updated_at" => SortField::UpdatedAt,
            "title" => SortField::Title,
            "platform" => SortField::Platform,
            "genre" => SortField::Genre,
            "state" => SortField::State,
            _ => return Err(SortParseError::UnknownField(field.to_string())),
        };

        let direction = match direction.map(str::to_lowercase).as_deref() {
            None | Some("" | "asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => return Err(SortParseError::UnknownDirection(other.to_string())),
        };

        Ok(Self { field, direction })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = match self.field {
            SortField::UpdatedAt => "updatedAt",
            SortField::Title => "title",
            SortField::Platform => "platform",
            SortField::Genre => "genre",
            SortField::State => "state",
        };
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{field},{direction}")
    }
}

/// A 0-based page of `size` rows in `sort` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: SortSpec,
}

impl PageRequest {
    pub const fn new(page: u64, size: u64, sort: SortSpec) -> Self {
        Self { page, size, sort }
    }

    /// Rows to skip before this page starts. Callers keep `page * size`
    /// within `i64::MAX`, the largest OFFSET the database drivers bind.
    pub const fn offset(&self) -> u64 {
        self.page * self.size
    }
}
