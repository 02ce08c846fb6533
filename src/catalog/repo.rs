use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::loader::{load_catalog, CatalogError};
use super::movie::MovieRecord;
use super::search::{search, FilterCriteria};
use super::sort::{sort_movies, SortBy, SortOrder};
use crate::util::make_slug;

/// Session-wide catalog store. The movie list is loaded once and treated
/// as read-only afterwards; the lock only exists so the catalog can be
/// shared with the handlers.
pub struct CatalogRepo {
    movies: Arc<RwLock<Vec<MovieRecord>>>,
    index: Arc<RwLock<HashMap<String, usize>>>,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreSummary {
    pub name: String,
    pub slug: String,
    pub movie_ids: Vec<String>,
    pub popularity: usize,
}

/// An actor or director derived from the catalog's credits.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonSummary {
    pub name: String,
    pub slug: String,
    pub movie_ids: Vec<String>,
    pub popularity: usize,
}

/// Group movie ids by name, most popular first, ties by name.
fn group_by_name(pairs: impl Iterator<Item = (String, String)>) -> Vec<(String, Vec<String>)> {
    let mut by_name: HashMap<String, Vec<String>> = HashMap::new();
    for (name, movie_id) in pairs {
        by_name.entry(name).or_default().push(movie_id);
    }

    let mut groups: Vec<(String, Vec<String>)> = by_name.into_iter().collect();
    groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(&b.0)));
    groups
}

impl CatalogRepo {
    pub fn new() -> Self {
        Self {
            movies: Arc::new(RwLock::new(Vec::new())),
            index: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn load(&self, path: &str, delay_ms: u64) -> Result<(), CatalogError> {
        let movies = load_catalog(path, delay_ms).await?;

        let mut index = HashMap::with_capacity(movies.len());
        for (pos, movie) in movies.iter().enumerate() {
            index.insert(movie.id.clone(), pos);
        }

        *self.index.write().await = index;
        *self.movies.write().await = movies;

        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn get_movie(&self, id: &str) -> Option<MovieRecord> {
        let index = self.index.read().await;
        let pos = *index.get(id)?;
        let movies = self.movies.read().await;
        movies.get(pos).cloned()
    }

    pub async fn get_movie_by_slug(&self, slug: &str) -> Option<MovieRecord> {
        let movies = self.movies.read().await;
        movies.iter().find(|m| m.slug == slug).cloned()
    }

    /// Full catalog in original order.
    pub async fn list_all(&self) -> Vec<MovieRecord> {
        self.movies.read().await.clone()
    }

    pub async fn search(
        &self,
        query: &str,
        criteria: &FilterCriteria,
        sort: Option<(SortBy, SortOrder)>,
    ) -> Vec<MovieRecord> {
        let movies = self.movies.read().await;
        let mut results = search(&movies, query, criteria);
        if let Some((sort_by, order)) = sort {
            sort_movies(&mut results, sort_by, order);
        }
        results.into_iter().cloned().collect()
    }

    /// Genre summaries sorted by popularity, then name.
    pub async fn genres(&self) -> Vec<GenreSummary> {
        let movies = self.movies.read().await;
        let pairs = movies
            .iter()
            .flat_map(|m| m.genres.iter().map(|g| (g.clone(), m.id.clone())));

        group_by_name(pairs)
            .into_iter()
            .map(|(name, movie_ids)| GenreSummary {
                slug: make_slug(&name),
                popularity: movie_ids.len(),
                name,
                movie_ids,
            })
            .collect()
    }

    /// Cast members across the catalog, sorted by popularity, then name.
    pub async fn actors(&self) -> Vec<PersonSummary> {
        let movies = self.movies.read().await;
        let pairs = movies
            .iter()
            .flat_map(|m| m.cast.iter().map(|name| (name.clone(), m.id.clone())));

        Self::person_summaries(pairs)
    }

    /// Directors across the catalog, sorted by popularity, then name.
    pub async fn directors(&self) -> Vec<PersonSummary> {
        let movies = self.movies.read().await;
        let pairs = movies
            .iter()
            .filter(|m| !m.director.is_empty())
            .map(|m| (m.director.clone(), m.id.clone()));

        Self::person_summaries(pairs)
    }

    fn person_summaries(pairs: impl Iterator<Item = (String, String)>) -> Vec<PersonSummary> {
        group_by_name(pairs)
            .into_iter()
            .map(|(name, movie_ids)| PersonSummary {
                slug: make_slug(&name),
                popularity: movie_ids.len(),
                name,
                movie_ids,
            })
            .collect()
    }

    /// Most recently released movies first, top 10. Stand-in for real
    /// trending data.
    pub async fn trending(&self) -> Vec<MovieRecord> {
        let movies = self.movies.read().await;
        let mut sorted: Vec<&MovieRecord> = movies.iter().collect();
        sorted.sort_by(|a, b| b.release_timestamp().cmp(&a.release_timestamp()));
        sorted.into_iter().take(10).cloned().collect()
    }

    /// Highly rated movies in catalog order, top 10. Stand-in for a real
    /// recommendation algorithm.
    pub async fn recommended(&self) -> Vec<MovieRecord> {
        let movies = self.movies.read().await;
        movies
            .iter()
            .filter(|m| m.ratings.imdb > 7.5)
            .take(10)
            .cloned()
            .collect()
    }
}

impl Default for CatalogRepo {
    fn default() -> Self {
        Self::new()
    }
}
