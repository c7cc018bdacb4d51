// CSV catalog loading with header validation.
//
// Schema problems are caught before any row is parsed: a missing file and
// missing required columns are both fatal, and the error message names
// every absent column at once rather than failing on the first.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use super::model::MovieRecord;

/// Columns the catalog header must contain. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "title",
    "overview",
    "poster_url",
    "genres",
    "top_cast",
    "release_date",
    "IMDb_Rating",
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file not found: {path}")]
    Missing { path: String },

    #[error("catalog is missing required columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] csv::Error),
}

/// An ordered, immutable collection of movie rows keyed by title.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<MovieRecord>,
}

impl Catalog {
    /// Load a catalog from a CSV file with a header row.
    ///
    /// A file with a valid header and zero data rows loads successfully;
    /// the caller decides how to surface the empty-catalog condition.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::Missing {
                path: path.display().to_string(),
            });
        }

        let mut reader = csv::Reader::from_path(path)?;

        let headers = reader.headers()?.clone();
        let present: HashSet<&str> = headers.iter().collect();
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !present.contains(**column))
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CatalogError::Schema { missing });
        }

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: MovieRecord = row?;
            records.push(record);
        }

        if records.is_empty() {
            warn!(path = %path.display(), "catalog loaded with zero rows");
        } else {
            info!(path = %path.display(), rows = records.len(), "catalog loaded");
        }

        Ok(Self { records })
    }

    /// Build a catalog directly from records, preserving their order.
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows usable for similarity: those with a non-blank overview, paired
    /// with their original catalog row index.
    pub fn eligible(&self) -> impl Iterator<Item = (usize, &MovieRecord)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.overview_text().is_some())
    }

    pub fn eligible_count(&self) -> usize {
        self.eligible().count()
    }

    /// First record whose title matches exactly (case-sensitive). With
    /// duplicate titles, the first occurrence wins.
    pub fn find(&self, title: &str) -> Option<&MovieRecord> {
        self.records.iter().find(|record| record.title == title)
    }

    /// How many rows carry a title already seen earlier in the catalog.
    pub fn duplicate_title_count(&self) -> usize {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|record| !seen.insert(record.title.as_str()))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, overview: Option<&str>) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            overview: overview.map(str::to_string),
            poster_url: None,
            genres: String::new(),
            top_cast: String::new(),
            release_date: String::new(),
            imdb_rating: None,
        }
    }

    #[test]
    fn eligible_skips_rows_without_overview() {
        let catalog = Catalog::from_records(vec![
            record("A", Some("plot a")),
            record("B", None),
            record("C", Some("   ")),
            record("D", Some("plot d")),
        ]);
        let rows: Vec<usize> = catalog.eligible().map(|(row, _)| row).collect();
        assert_eq!(rows, vec![0, 3]);
        assert_eq!(catalog.eligible_count(), 2);
    }

    #[test]
    fn find_is_case_sensitive_first_occurrence() {
        let catalog = Catalog::from_records(vec![
            record("Heat", Some("first")),
            record("heat", Some("lowercase")),
            record("Heat", Some("second")),
        ]);
        assert_eq!(
            catalog.find("Heat").and_then(|r| r.overview.as_deref()),
            Some("first")
        );
        assert_eq!(
            catalog.find("heat").and_then(|r| r.overview.as_deref()),
            Some("lowercase")
        );
        assert!(catalog.find("HEAT").is_none());
    }

    #[test]
    fn duplicate_titles_counted() {
        let catalog = Catalog::from_records(vec![
            record("A", None),
            record("B", None),
            record("A", None),
            record("A", None),
        ]);
        assert_eq!(catalog.duplicate_title_count(), 2);
    }
}
