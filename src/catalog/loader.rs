use std::time::Duration;

use tracing::{debug, info};

use super::movie::MovieRecord;
use crate::util::{generate_id, make_slug};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {0}: {1}")]
    Read(String, std::io::Error),
    #[error("Failed to parse catalog file {0}: {1}")]
    Parse(String, serde_json::Error),
}

/// Load the catalog from a JSON file. The configured delay simulates the
/// latency of the mock endpoint the front end was written against.
pub async fn load_catalog(path: &str, delay_ms: u64) -> Result<Vec<MovieRecord>, CatalogError> {
    if delay_ms > 0 {
        debug!("Simulating catalog endpoint delay of {}ms", delay_ms);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CatalogError::Read(path.to_string(), e))?;

    let movies = parse_catalog(&content).map_err(|e| CatalogError::Parse(path.to_string(), e))?;

    info!("Loaded {} movies from {}", movies.len(), path);
    Ok(movies)
}

/// Parse and normalize catalog JSON. Entries without an id get a stable
/// hash-derived one; entries without a slug get one derived from the title.
pub fn parse_catalog(content: &str) -> Result<Vec<MovieRecord>, serde_json::Error> {
    let mut movies: Vec<MovieRecord> = serde_json::from_str(content)?;

    for movie in &mut movies {
        if movie.id.is_empty() {
            movie.id = generate_id(&movie.title, &movie.release_date);
        }
        if movie.slug.is_empty() {
            movie.slug = make_slug(&movie.title);
        }
    }

    Ok(movies)
}
