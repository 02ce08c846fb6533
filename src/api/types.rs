use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::MovieRecord;

/// Query parameters for /api/movies/search. Mirrors the closed filter set
/// of the search engine; unknown parameters are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub min_rating: Option<f32>,
    #[serde(default)]
    pub max_duration: Option<u32>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub items: Vec<MovieRecord>,
    pub total_count: usize,
}

/// A watch-history entry joined to its movie for the continue-watching rail.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueWatchingItem {
    #[serde(flatten)]
    pub movie: MovieRecord,
    pub progress: f64,
    pub watched_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub items: Vec<crate::userdata::Notification>,
    pub unread_count: usize,
}
