use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One catalog entry, either a movie or a series. Immutable for the
/// lifetime of the session once the catalog has been loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub overview: Option<String>,
    pub release_date: String,
    pub duration: u32,
    #[serde(default)]
    pub genres: Vec<String>,
    pub director: String,
    #[serde(default)]
    pub cast: Vec<String>,
    pub ratings: Ratings,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub labels: Vec<MovieLabel>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Ratings {
    #[serde(default)]
    pub imdb: f32,
    #[serde(default)]
    pub kinopoisk: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieLabel {
    pub slug: String,
    pub text: String,
    pub color: String,
}

impl MovieRecord {
    /// Calendar year of the release date. Malformed dates yield None, so a
    /// year filter simply never matches them.
    pub fn release_year(&self) -> Option<i32> {
        parse_release_date(&self.release_date).map(|d| d.year())
    }

    pub fn release_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_release_date(&self.release_date)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    }
}

fn parse_release_date(s: &str) -> Option<NaiveDate> {
    // Accept both plain ISO dates and full RFC 3339 timestamps.
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(release_date: &str) -> MovieRecord {
        MovieRecord {
            id: "1".to_string(),
            title: "Inception".to_string(),
            slug: "inception".to_string(),
            overview: None,
            release_date: release_date.to_string(),
            duration: 148,
            genres: vec!["Sci-Fi".to_string()],
            director: "Christopher Nolan".to_string(),
            cast: vec!["Leonardo DiCaprio".to_string()],
            ratings: Ratings {
                imdb: 8.8,
                kinopoisk: 8.7,
            },
            tags: Vec::new(),
            poster_path: None,
            backdrop_path: None,
            labels: Vec::new(),
        }
    }

    #[test]
    fn test_release_year() {
        assert_eq!(record("2010-07-16").release_year(), Some(2010));
        assert_eq!(record("2010-07-16T00:00:00Z").release_year(), Some(2010));
    }

    #[test]
    fn test_release_year_malformed() {
        assert_eq!(record("not-a-date").release_year(), None);
        assert_eq!(record("").release_year(), None);
        assert_eq!(record("2010-13-45").release_year(), None);
    }
}
