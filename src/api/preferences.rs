use axum::{extract::State, Json};
use serde::Serialize;

use super::mock_delay;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct UserPreferences {
    pub theme: String,
    pub language: String,
}

pub async fn get_preferences(State(state): State<AppState>) -> Json<UserPreferences> {
    mock_delay(&state).await;
    Json(UserPreferences {
        theme: state.config.preferences.theme.clone(),
        language: state.config.preferences.language.clone(),
    })
}
