// Unit tests for CSV catalog loading and validation.
//
// Each test writes a small catalog file to a temp location and checks the
// load-time contract: schema validation before row parsing, empty-cell
// normalization, and the first-occurrence duplicate policy.

use std::io::Write;

use tempfile::NamedTempFile;

use marquee::catalog::{Catalog, CatalogError, PosterUrl};

const HEADER: &str = "title,overview,poster_url,genres,top_cast,release_date,IMDb_Rating";

fn catalog_file(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{header}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}

// ============================================================
// Successful loads
// ============================================================

#[test]
fn loads_rows_in_file_order() {
    let file = catalog_file(
        HEADER,
        &[
            "Heat,A heist thriller,https://example.com/heat.jpg,\"Crime, Drama\",\"Al Pacino, Robert De Niro\",1995-12-15,8.3",
            "Ronin,Mercenaries chase a case,https://example.com/ronin.jpg,Action,Robert De Niro,1998-09-25,7.2",
        ],
    );

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.records()[0].title, "Heat");
    assert_eq!(catalog.records()[1].title, "Ronin");
    assert_eq!(catalog.records()[0].imdb_rating, Some(8.3));
    assert_eq!(catalog.records()[0].genre_list(), vec!["Crime", "Drama"]);
}

#[test]
fn quoted_overview_may_contain_commas() {
    let file = catalog_file(
        HEADER,
        &["Heat,\"A detective, a thief, one city\",,Crime,Al Pacino,1995-12-15,8.3"],
    );
    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(
        catalog.records()[0].overview.as_deref(),
        Some("A detective, a thief, one city")
    );
}

#[test]
fn empty_cells_normalize_to_none() {
    let file = catalog_file(HEADER, &["Heat,,,Crime,Al Pacino,1995-12-15,"]);
    let catalog = Catalog::load(file.path()).unwrap();
    let record = &catalog.records()[0];
    assert_eq!(record.overview, None);
    assert_eq!(record.poster_url, None);
    assert_eq!(record.imdb_rating, None);
    assert_eq!(record.poster(), PosterUrl::Missing);
}

#[test]
fn extra_columns_are_ignored() {
    let file = catalog_file(
        &format!("{HEADER},budget"),
        &["Heat,A heist thriller,,Crime,Al Pacino,1995-12-15,8.3,60000000"],
    );
    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 1);
}

#[test]
fn header_only_file_loads_empty() {
    let file = catalog_file(HEADER, &[]);
    let catalog = Catalog::load(file.path()).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.eligible_count(), 0);
}

// ============================================================
// Load errors
// ============================================================

#[test]
fn missing_file_is_a_distinct_error() {
    let err = Catalog::load("/nonexistent/path/movies.csv").unwrap_err();
    assert!(matches!(err, CatalogError::Missing { .. }));
    assert!(err.to_string().contains("/nonexistent/path/movies.csv"));
}

#[test]
fn missing_overview_column_fails_schema_check() {
    let file = catalog_file(
        "title,poster_url,genres,top_cast,release_date,IMDb_Rating",
        &["Heat,,Crime,Al Pacino,1995-12-15,8.3"],
    );
    let err = Catalog::load(file.path()).unwrap_err();
    match err {
        CatalogError::Schema { ref missing } => {
            assert_eq!(missing, &vec!["overview".to_string()]);
        }
        other => panic!("expected Schema error, got {other:?}"),
    }
}

#[test]
fn schema_error_names_every_missing_column() {
    let file = catalog_file("title,genres", &["Heat,Crime"]);
    let err = Catalog::load(file.path()).unwrap_err();
    match err {
        CatalogError::Schema { ref missing } => {
            for column in ["overview", "poster_url", "top_cast", "release_date", "IMDb_Rating"] {
                assert!(
                    missing.contains(&column.to_string()),
                    "missing list should include {column}: {missing:?}"
                );
            }
            assert!(!missing.contains(&"title".to_string()));
        }
        other => panic!("expected Schema error, got {other:?}"),
    }
}

#[test]
fn non_numeric_rating_is_a_parse_error() {
    let file = catalog_file(HEADER, &["Heat,A heist thriller,,Crime,Al Pacino,1995-12-15,great"]);
    assert!(matches!(
        Catalog::load(file.path()),
        Err(CatalogError::Parse(_))
    ));
}

// ============================================================
// Lookup semantics
// ============================================================

#[test]
fn find_returns_first_occurrence_of_duplicate_titles() {
    let file = catalog_file(
        HEADER,
        &[
            "Remake,The original plot,,Drama,Cast A,1960-01-01,7.9",
            "Other,Another plot,,Drama,Cast B,1970-01-01,6.5",
            "Remake,The remake plot,,Drama,Cast C,2010-01-01,6.1",
        ],
    );
    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.duplicate_title_count(), 1);
    let found = catalog.find("Remake").unwrap();
    assert_eq!(found.overview.as_deref(), Some("The original plot"));
    assert_eq!(found.release_year(), Some(1960));
}

#[test]
fn rows_without_overview_stay_in_catalog_but_not_eligible() {
    let file = catalog_file(
        HEADER,
        &[
            "Heat,A heist thriller,,Crime,Al Pacino,1995-12-15,8.3",
            "Lost Reel,,,Mystery,Unknown,1930-01-01,5.0",
        ],
    );
    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.eligible_count(), 1);
    assert!(catalog.find("Lost Reel").is_some(), "row stays addressable");
}
