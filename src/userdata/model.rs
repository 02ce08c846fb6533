use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-movie engagement flags. At most one record exists per movie, and a
/// record only exists while at least one flag is true.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    pub id: String,
    pub movie_id: String,
    pub bookmark: bool,
    pub like: bool,
    pub watch_later: bool,
    pub created_at: DateTime<Utc>,
}

impl FavoriteRecord {
    pub fn flag(&self, flag: FavoriteFlag) -> bool {
        match flag {
            FavoriteFlag::Bookmark => self.bookmark,
            FavoriteFlag::Like => self.like,
            FavoriteFlag::WatchLater => self.watch_later,
        }
    }

    pub fn set_flag(&mut self, flag: FavoriteFlag, value: bool) {
        match flag {
            FavoriteFlag::Bookmark => self.bookmark = value,
            FavoriteFlag::Like => self.like = value,
            FavoriteFlag::WatchLater => self.watch_later = value,
        }
    }

    pub fn any_flag_set(&self) -> bool {
        self.bookmark || self.like || self.watch_later
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FavoriteFlag {
    Bookmark,
    Like,
    WatchLater,
}

impl FavoriteFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteFlag::Bookmark => "bookmark",
            FavoriteFlag::Like => "like",
            FavoriteFlag::WatchLater => "watchLater",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "bookmark" => Some(FavoriteFlag::Bookmark),
            "like" => Some(FavoriteFlag::Like),
            "watchLater" | "watch-later" => Some(FavoriteFlag::WatchLater),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchHistoryEntry {
    pub id: String,
    pub movie_id: String,
    pub watched_at: DateTime<Utc>,
    /// Fraction watched, 0.0 to 1.0.
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub movie_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Seed error: {0}")]
    Seed(String),
}

pub type DbResult<T> = Result<T, DbError>;
