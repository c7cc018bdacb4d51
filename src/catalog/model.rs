// MovieRecord — one row of the catalog.
//
// Field names mirror the CSV header. Empty cells deserialize to None for
// the optional fields; the comma-delimited genres and cast cells stay raw
// here and are split on demand by the accessors.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::poster::PosterUrl;

/// A single movie row. Title is the identifier; when the catalog holds
/// duplicate titles, lookups bind to the first occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub overview: Option<String>,
    pub poster_url: Option<String>,
    pub genres: String,
    pub top_cast: String,
    pub release_date: String,
    #[serde(rename = "IMDb_Rating")]
    pub imdb_rating: Option<f64>,
}

impl MovieRecord {
    /// The overview text, if the row has a non-blank one. Rows without it
    /// are excluded from the similarity universe.
    pub fn overview_text(&self) -> Option<&str> {
        self.overview
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
    }

    /// Release year parsed from the release_date cell.
    ///
    /// Tries an ISO date first, then falls back to the first run of four
    /// consecutive digits so formats like "July 2008" still yield a year.
    pub fn release_year(&self) -> Option<i32> {
        let raw = self.release_date.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date.year());
        }
        let digits: Vec<char> = raw.chars().collect();
        digits
            .windows(4)
            .find(|w| w.iter().all(|c| c.is_ascii_digit()))
            .map(|w| w.iter().collect::<String>())
            .and_then(|s| s.parse().ok())
    }

    /// Genre labels split out of the comma-delimited cell.
    pub fn genre_list(&self) -> Vec<&str> {
        split_comma_cell(&self.genres)
    }

    /// The first `n` cast members from the comma-delimited cell.
    pub fn lead_cast(&self, n: usize) -> Vec<&str> {
        let mut cast = split_comma_cell(&self.top_cast);
        cast.truncate(n);
        cast
    }

    /// Tagged classification of the poster cell.
    pub fn poster(&self) -> PosterUrl {
        PosterUrl::classify(self.poster_url.as_deref())
    }
}

fn split_comma_cell(cell: &str) -> Vec<&str> {
    cell.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}
