use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::mock_delay;
use super::types::ContinueWatchingItem;
use crate::server::AppState;
use crate::userdata::{WatchHistoryEntry, WatchHistoryRepo};

pub async fn list_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<WatchHistoryEntry>>, StatusCode> {
    mock_delay(&state).await;
    state
        .db
        .list_history()
        .await
        .map(Json)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

pub async fn record_watch(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<Json<WatchHistoryEntry>, StatusCode> {
    if state.catalog.get_movie(&movie_id).await.is_none() {
        return Err(StatusCode::NOT_FOUND);
    }

    state
        .db
        .record_watch(&movie_id)
        .await
        .map(Json)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

pub async fn continue_watching(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContinueWatchingItem>>, StatusCode> {
    let entries = state
        .db
        .continue_watching()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    // Entries whose movie left the catalog are silently skipped.
    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(movie) = state.catalog.get_movie(&entry.movie_id).await {
            items.push(ContinueWatchingItem {
                movie,
                progress: entry.progress,
                watched_at: entry.watched_at,
            });
        }
    }

    Ok(Json(items))
}
