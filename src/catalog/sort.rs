use std::cmp::Ordering;

use super::movie::MovieRecord;
use crate::util::make_sort_title;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Year,
    Rating,
    Title,
}

impl SortBy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "year" => Some(SortBy::Year),
            "rating" => Some(SortBy::Rating),
            "title" => Some(SortBy::Title),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("descending") || s.eq_ignore_ascii_case("desc") {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

/// Re-order search results. Sorting is always an explicit caller step,
/// never part of the search itself; the sort is stable so ties keep
/// catalog order.
pub fn sort_movies(movies: &mut Vec<&MovieRecord>, sort_by: SortBy, order: SortOrder) {
    movies.sort_by(|a, b| {
        let ordering = match sort_by {
            SortBy::Year => a.release_year().cmp(&b.release_year()),
            SortBy::Rating => a
                .ratings
                .imdb
                .partial_cmp(&b.ratings.imdb)
                .unwrap_or(Ordering::Equal),
            SortBy::Title => make_sort_title(&a.title).cmp(&make_sort_title(&b.title)),
        };
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}
