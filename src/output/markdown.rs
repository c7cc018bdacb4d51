// Markdown report generation — a shareable rendition of one
// recommendation run, with poster images embedded.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::engine::ScoredMovie;

/// Write a markdown report for a recommendation run and return the path
/// it was saved to.
pub fn generate_report(
    query_title: &str,
    results: &[ScoredMovie],
    placeholder: &str,
    output_path: &str,
) -> Result<String> {
    let mut report = String::new();

    report.push_str(&format!("# Movies similar to {query_title}\n\n"));
    if results.is_empty() {
        report.push_str("No candidates with an overview were available to rank.\n");
    } else {
        report.push_str(&format!(
            "{} titles ranked by plot similarity.\n\n",
            results.len()
        ));
    }

    for (i, scored) in results.iter().enumerate() {
        let record = &scored.record;
        let year = record
            .release_year()
            .map(|y| format!(" ({y})"))
            .unwrap_or_default();

        report.push_str(&format!("## {}. {}{year}\n\n", i + 1, record.title));
        report.push_str(&format!(
            "![{}]({})\n\n",
            record.title,
            record.poster().display_url(placeholder)
        ));
        report.push_str(&format!("- Similarity: {:.2}\n", scored.score));
        let genres = record.genre_list();
        if !genres.is_empty() {
            report.push_str(&format!("- Genres: {}\n", genres.join(", ")));
        }
        let cast = record.lead_cast(3);
        if !cast.is_empty() {
            report.push_str(&format!("- Cast: {}\n", cast.join(", ")));
        }
        if let Some(rating) = record.imdb_rating {
            report.push_str(&format!("- Rating: {rating:.1}/10\n"));
        }
        if let Some(overview) = record.overview_text() {
            report.push_str(&format!("\n> {overview}\n"));
        }
        report.push('\n');
    }

    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create report directory {}", parent.display()))?;
        }
    }
    fs::write(path, report)
        .with_context(|| format!("failed to write report to {}", path.display()))?;

    Ok(path.display().to_string())
}
