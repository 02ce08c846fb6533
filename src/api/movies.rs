use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::mock_delay;
use super::types::{SearchParams, SearchResponse};
use crate::catalog::{FilterCriteria, GenreSummary, MovieRecord, PersonSummary, SortBy, SortOrder};
use crate::server::AppState;

pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<MovieRecord>> {
    mock_delay(&state).await;
    Json(state.catalog.list_all().await)
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovieRecord>, StatusCode> {
    let movie = state.catalog.get_movie(&id).await;
    // Front-end detail pages link by slug, the API by id; accept both.
    let movie = match movie {
        Some(movie) => Some(movie),
        None => state.catalog.get_movie_by_slug(&id).await,
    };
    movie.map(Json).ok_or(StatusCode::NOT_FOUND)
}

pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let criteria = FilterCriteria {
        genre: params.genre.filter(|g| !g.is_empty()),
        year: params.year,
        min_rating: params.min_rating,
        max_duration: params.max_duration,
    };

    let sort = params
        .sort_by
        .as_deref()
        .and_then(SortBy::from_str)
        .map(|sort_by| {
            let order = params
                .sort_order
                .as_deref()
                .map(SortOrder::from_str)
                .unwrap_or_default();
            (sort_by, order)
        });

    let query = params.q.unwrap_or_default();
    let items = state.catalog.search(&query, &criteria, sort).await;
    let total_count = items.len();

    Json(SearchResponse { items, total_count })
}

pub async fn get_genres(State(state): State<AppState>) -> Json<Vec<GenreSummary>> {
    mock_delay(&state).await;
    Json(state.catalog.genres().await)
}

pub async fn get_actors(State(state): State<AppState>) -> Json<Vec<PersonSummary>> {
    mock_delay(&state).await;
    Json(state.catalog.actors().await)
}

pub async fn get_directors(State(state): State<AppState>) -> Json<Vec<PersonSummary>> {
    mock_delay(&state).await;
    Json(state.catalog.directors().await)
}

pub async fn get_trending(State(state): State<AppState>) -> Json<Vec<MovieRecord>> {
    Json(state.catalog.trending().await)
}

pub async fn get_recommended(State(state): State<AppState>) -> Json<Vec<MovieRecord>> {
    Json(state.catalog.recommended().await)
}
