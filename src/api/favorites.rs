use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::mock_delay;
use crate::server::AppState;
use crate::userdata::{FavoriteFlag, FavoriteRecord, FavoriteRepo};

pub async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoriteRecord>>, StatusCode> {
    mock_delay(&state).await;
    state
        .db
        .list_favorites()
        .await
        .map(Json)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

pub async fn toggle_on(
    State(state): State<AppState>,
    Path((movie_id, flag)): Path<(String, String)>,
) -> Result<Json<FavoriteRecord>, StatusCode> {
    let flag = FavoriteFlag::from_str(&flag).ok_or(StatusCode::BAD_REQUEST)?;

    if state.catalog.get_movie(&movie_id).await.is_none() {
        return Err(StatusCode::NOT_FOUND);
    }

    state
        .db
        .toggle_on(&movie_id, flag)
        .await
        .map(Json)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Clearing the last flag deletes the record; that case answers 204.
pub async fn toggle_off(
    State(state): State<AppState>,
    Path((movie_id, flag)): Path<(String, String)>,
) -> Result<Response, StatusCode> {
    let flag = FavoriteFlag::from_str(&flag).ok_or(StatusCode::BAD_REQUEST)?;

    let remaining = state
        .db
        .toggle_off(&movie_id, flag)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    match remaining {
        Some(record) => Ok(Json(record).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
