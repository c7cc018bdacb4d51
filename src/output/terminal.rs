// Colored terminal output for recommendation results and movie details.
//
// This module handles all terminal-specific formatting: colors, score
// bars, metadata lines. The main.rs subcommands delegate here.

use colored::Colorize;

use crate::catalog::MovieRecord;
use crate::engine::ScoredMovie;

/// Display ranked recommendations for a query title.
pub fn display_recommendations(query_title: &str, results: &[ScoredMovie], placeholder: &str) {
    if results.is_empty() {
        println!("No candidates with an overview besides \"{query_title}\" — nothing to rank.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Movies similar to {query_title} ===").bold()
    );
    println!();

    let bar_width: usize = 20;

    for (i, scored) in results.iter().enumerate() {
        let year = scored
            .record
            .release_year()
            .map(|y| format!(" ({y})"))
            .unwrap_or_default();

        // Score bar: filled portion scales with cosine similarity
        let filled = (scored.score * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));
        let colored_bar = if scored.score >= 0.30 {
            bar.bright_green()
        } else if scored.score >= 0.10 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>2}. {:<42} {} {:.2}",
            i + 1,
            format!("{}{year}", scored.record.title).bold(),
            colored_bar,
            scored.score
        );
        print_metadata_lines(&scored.record, placeholder, "      ");
        if let Some(overview) = scored.record.overview_text() {
            println!("      {}", super::truncate_chars(overview, 160).dimmed());
        }
        println!();
    }
}

/// Display one movie's full detail card.
pub fn display_movie_detail(record: &MovieRecord, placeholder: &str) {
    println!("\n{}", format!("=== {} ===", record.title).bold());
    if let Some(year) = record.release_year() {
        println!("  Released: {year}");
    }
    print_metadata_lines(record, placeholder, "  ");
    match record.overview_text() {
        Some(overview) => println!("\n  {overview}"),
        None => println!("\n  {}", "(no overview on file — cannot be recommended or queried)".dimmed()),
    }
}

/// Display the title picker: eligible titles with year and rating.
pub fn display_title_list(records: &[&MovieRecord]) {
    if records.is_empty() {
        println!("No titles with an overview in the catalog.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Titles available for recommendation ({}) ===", records.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<44} {:>6} {:>7}",
        "#".dimmed(),
        "Title".dimmed(),
        "Year".dimmed(),
        "Rating".dimmed(),
    );
    println!("  {}", "-".repeat(66).dimmed());

    for (i, record) in records.iter().enumerate() {
        let year = record
            .release_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "-".to_string());
        let rating = record
            .imdb_rating
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!("  {:>4}. {:<44} {:>6} {:>7}", i + 1, record.title, year, rating);
    }
    println!();
}

fn print_metadata_lines(record: &MovieRecord, placeholder: &str, indent: &str) {
    let genres = record.genre_list();
    if !genres.is_empty() {
        println!("{indent}Genres: {}", genres.join(", "));
    }
    let cast = record.lead_cast(3);
    if !cast.is_empty() {
        println!("{indent}Cast: {}", cast.join(", "));
    }
    if let Some(rating) = record.imdb_rating {
        println!("{indent}Rating: {rating:.1}/10");
    }

    let poster = record.poster();
    if poster.needs_placeholder() {
        println!(
            "{indent}Poster: {} {}",
            poster.display_url(placeholder).dimmed(),
            "(placeholder)".dimmed()
        );
    } else {
        println!("{indent}Poster: {}", poster.display_url(placeholder).dimmed());
    }
}
