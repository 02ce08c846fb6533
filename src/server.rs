use axum::{
    extract::Request,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::catalog::CatalogRepo;
use crate::config::Config;
use crate::metadata::MetadataClient;
use crate::userdata::Repository;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<dyn Repository>,
    pub catalog: Arc<CatalogRepo>,
    pub metadata: Arc<MetadataClient>,
}

impl AppState {
    pub fn new(
        config: Config,
        db: Arc<dyn Repository>,
        catalog: Arc<CatalogRepo>,
        metadata: Arc<MetadataClient>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            db,
            catalog,
            metadata,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/movies", get(crate::api::movies::list_movies))
        .route("/api/movies/search", get(crate::api::movies::search_movies))
        .route("/api/movies/:id", get(crate::api::movies::get_movie))
        .route("/api/genres", get(crate::api::movies::get_genres))
        .route("/api/actors", get(crate::api::movies::get_actors))
        .route("/api/directors", get(crate::api::movies::get_directors))
        .route(
            "/api/user-preferences",
            get(crate::api::preferences::get_preferences),
        )
        .route("/api/trending", get(crate::api::movies::get_trending))
        .route("/api/recommended", get(crate::api::movies::get_recommended))
        .route(
            "/api/continue-watching",
            get(crate::api::history::continue_watching),
        )
        .route("/api/favorites", get(crate::api::favorites::list_favorites))
        .route(
            "/api/favorites/:movie_id/:flag",
            post(crate::api::favorites::toggle_on).delete(crate::api::favorites::toggle_off),
        )
        .route("/api/watch-history", get(crate::api::history::list_history))
        .route(
            "/api/watch-history/:movie_id",
            post(crate::api::history::record_watch),
        )
        .route(
            "/api/notifications",
            get(crate::api::notifications::list_notifications),
        )
        .route(
            "/api/notifications/read-all",
            post(crate::api::notifications::mark_all_read),
        )
        .route(
            "/api/notifications/:id/read",
            post(crate::api::notifications::mark_read),
        )
        .route(
            "/api/metadata/search",
            get(crate::api::metadata::metadata_search),
        );

    let mut router = Router::new()
        .route("/robots.txt", get(robots_txt_handler))
        .merge(api_routes)
        .fallback(fallback_handler);

    if let Some(ref appdir) = state.config.appdir {
        router = router.fallback_service(ServeDir::new(appdir));
    }

    router
        .layer(axum::middleware::from_fn(crate::middleware::normalize_path))
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn robots_txt_handler() -> &'static str {
    "User-agent: *\nDisallow: /\n"
}

async fn fallback_handler(req: Request<axum::body::Body>) -> impl IntoResponse {
    // CORS preflight still has to succeed on unmatched paths.
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}
