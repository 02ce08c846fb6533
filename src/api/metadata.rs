use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::error;

use crate::metadata::MetadataError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct MetadataQuery {
    #[serde(default)]
    pub q: String,
}

/// Proxy a lookup to the external metadata API. The upstream response body
/// is passed through unchanged.
pub async fn metadata_search(
    State(state): State<AppState>,
    Query(params): Query<MetadataQuery>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match state.metadata.search(&params.q).await {
        Ok(body) => Ok(Json(body)),
        Err(MetadataError::MissingApiKey) => Err(StatusCode::SERVICE_UNAVAILABLE),
        Err(e) => {
            error!("Metadata lookup failed: {}", e);
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}
