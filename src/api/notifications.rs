use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::mock_delay;
use super::types::NotificationsResponse;
use crate::server::AppState;
use crate::userdata::{Notification, NotificationRepo};

pub async fn list_notifications(
    State(state): State<AppState>,
) -> Result<Json<NotificationsResponse>, StatusCode> {
    mock_delay(&state).await;
    let items = state
        .db
        .list_notifications()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let unread_count = items.iter().filter(|n| !n.read).count();
    Ok(Json(NotificationsResponse {
        items,
        unread_count,
    }))
}

pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Notification>, StatusCode> {
    state
        .db
        .mark_read(&id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn mark_all_read(State(state): State<AppState>) -> Result<StatusCode, StatusCode> {
    state
        .db
        .mark_all_read()
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok(StatusCode::NO_CONTENT)
}
