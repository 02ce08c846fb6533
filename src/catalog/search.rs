use super::movie::MovieRecord;

/// Closed set of optional constraints applied alongside the free-text
/// query. An absent field means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub min_rating: Option<f32>,
    pub max_duration: Option<u32>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.genre.is_none()
            && self.year.is_none()
            && self.min_rating.is_none()
            && self.max_duration.is_none()
    }
}

/// Returns true if every whitespace-separated term of the query is a
/// case-insensitive substring of the title, the director, or at least one
/// cast member. An empty query matches everything.
pub fn matches_query(movie: &MovieRecord, query: &str) -> bool {
    let title = movie.title.to_lowercase();
    let director = movie.director.to_lowercase();

    query.split_whitespace().all(|term| {
        let term = term.to_lowercase();
        title.contains(&term)
            || director.contains(&term)
            || movie
                .cast
                .iter()
                .any(|actor| actor.to_lowercase().contains(&term))
    })
}

/// Apply the filter criteria to a single record. All present constraints
/// must hold for the record to be kept.
pub fn matches_criteria(movie: &MovieRecord, criteria: &FilterCriteria) -> bool {
    if criteria.is_empty() {
        return true;
    }

    if let Some(ref genre) = criteria.genre {
        if !movie.genres.iter().any(|g| g == genre) {
            return false;
        }
    }

    if let Some(year) = criteria.year {
        // A malformed release date fails the comparison, it never errors.
        if movie.release_year() != Some(year) {
            return false;
        }
    }

    if let Some(min_rating) = criteria.min_rating {
        if movie.ratings.imdb < min_rating {
            return false;
        }
    }

    if let Some(max_duration) = criteria.max_duration {
        if movie.duration > max_duration {
            return false;
        }
    }

    true
}

/// Search the catalog. This is a pure linear scan: results keep catalog
/// order, and no relevance scoring is applied. Re-ordering is a separate,
/// explicit step (see [`sort::sort_movies`](super::sort::sort_movies)).
pub fn search<'a>(
    catalog: &'a [MovieRecord],
    query: &str,
    criteria: &FilterCriteria,
) -> Vec<&'a MovieRecord> {
    catalog
        .iter()
        .filter(|movie| matches_query(movie, query) && matches_criteria(movie, criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::movie::Ratings;

    fn movie(
        id: &str,
        title: &str,
        director: &str,
        cast: &[&str],
        genre: &str,
        date: &str,
        imdb: f32,
        duration: u32,
    ) -> MovieRecord {
        MovieRecord {
            id: id.to_string(),
            title: title.to_string(),
            slug: String::new(),
            overview: None,
            release_date: date.to_string(),
            duration,
            genres: vec![genre.to_string()],
            director: director.to_string(),
            cast: cast.iter().map(|s| s.to_string()).collect(),
            ratings: Ratings {
                imdb,
                kinopoisk: 0.0,
            },
            tags: Vec::new(),
            poster_path: None,
            backdrop_path: None,
            labels: Vec::new(),
        }
    }

    fn catalog() -> Vec<MovieRecord> {
        vec![
            movie(
                "1",
                "Inception",
                "Christopher Nolan",
                &["Leonardo DiCaprio", "Elliot Page"],
                "Sci-Fi",
                "2010-07-16",
                8.8,
                148,
            ),
            movie(
                "2",
                "Goodfellas",
                "Martin Scorsese",
                &["Ray Liotta", "Robert De Niro"],
                "Crime",
                "1990-09-19",
                8.7,
                146,
            ),
        ]
    }

    fn titles(results: &[&MovieRecord]) -> Vec<String> {
        results.iter().map(|m| m.title.clone()).collect()
    }

    #[test]
    fn test_default_criteria_is_empty() {
        assert!(FilterCriteria::default().is_empty());
        let criteria = FilterCriteria {
            genre: Some("Crime".to_string()),
            ..Default::default()
        };
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let catalog = catalog();
        let results = search(&catalog, "", &FilterCriteria::default());
        assert_eq!(titles(&results), vec!["Inception", "Goodfellas"]);
    }

    #[test]
    fn test_title_substring() {
        let catalog = catalog();
        let results = search(&catalog, "incep", &FilterCriteria::default());
        assert_eq!(titles(&results), vec!["Inception"]);
    }

    #[test]
    fn test_director_and_cast_match() {
        let catalog = catalog();
        let results = search(&catalog, "scorsese", &FilterCriteria::default());
        assert_eq!(titles(&results), vec!["Goodfellas"]);

        let results = search(&catalog, "dicaprio", &FilterCriteria::default());
        assert_eq!(titles(&results), vec!["Inception"]);
    }

    #[test]
    fn test_all_terms_must_match() {
        let catalog = catalog();
        // Terms may match across different fields of the same record.
        let results = search(&catalog, "nolan inception", &FilterCriteria::default());
        assert_eq!(titles(&results), vec!["Inception"]);

        let results = search(&catalog, "nolan goodfellas", &FilterCriteria::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_genre_filter() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            genre: Some("Crime".to_string()),
            ..Default::default()
        };
        let results = search(&catalog, "", &criteria);
        assert_eq!(titles(&results), vec!["Goodfellas"]);
    }

    #[test]
    fn test_genre_is_exact_match() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            genre: Some("Sci".to_string()),
            ..Default::default()
        };
        assert!(search(&catalog, "", &criteria).is_empty());
    }

    #[test]
    fn test_year_filter() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            year: Some(2010),
            ..Default::default()
        };
        let results = search(&catalog, "", &criteria);
        assert_eq!(titles(&results), vec!["Inception"]);
    }

    #[test]
    fn test_year_filter_skips_malformed_dates() {
        let mut catalog = catalog();
        catalog[0].release_date = "garbage".to_string();
        let criteria = FilterCriteria {
            year: Some(2010),
            ..Default::default()
        };
        assert!(search(&catalog, "", &criteria).is_empty());
    }

    #[test]
    fn test_min_rating_filter() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            min_rating: Some(8.75),
            ..Default::default()
        };
        let results = search(&catalog, "", &criteria);
        assert_eq!(titles(&results), vec!["Inception"]);
    }

    #[test]
    fn test_min_rating_is_inclusive() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            min_rating: Some(8.7),
            ..Default::default()
        };
        let results = search(&catalog, "", &criteria);
        assert_eq!(titles(&results), vec!["Inception", "Goodfellas"]);
    }

    #[test]
    fn test_max_duration_filter() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            max_duration: Some(147),
            ..Default::default()
        };
        let results = search(&catalog, "", &criteria);
        assert_eq!(titles(&results), vec!["Goodfellas"]);
    }

    #[test]
    fn test_max_duration_is_inclusive() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            max_duration: Some(146),
            ..Default::default()
        };
        let results = search(&catalog, "", &criteria);
        assert_eq!(titles(&results), vec!["Goodfellas"]);
    }

    #[test]
    fn test_query_and_filters_combine() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            genre: Some("Sci-Fi".to_string()),
            ..Default::default()
        };
        assert!(search(&catalog, "goodfellas", &criteria).is_empty());
        assert_eq!(
            titles(&search(&catalog, "incep", &criteria)),
            vec!["Inception"]
        );
    }

    #[test]
    fn test_results_are_subset_of_catalog() {
        let catalog = catalog();
        for query in ["", "a", "e", "the", "nolan de niro"] {
            let results = search(&catalog, query, &FilterCriteria::default());
            assert!(results.len() <= catalog.len());
            for movie in results {
                assert!(matches_query(movie, query));
            }
        }
    }
}
