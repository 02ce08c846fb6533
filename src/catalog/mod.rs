pub mod loader;
pub mod movie;
pub mod repo;
pub mod search;
pub mod sort;

pub use loader::{load_catalog, parse_catalog, CatalogError};
pub use movie::{MovieLabel, MovieRecord, Ratings};
pub use repo::{CatalogRepo, GenreSummary, PersonSummary};
pub use search::{matches_criteria, matches_query, search, FilterCriteria};
pub use sort::{sort_movies, SortBy, SortOrder};
