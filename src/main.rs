use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;

use marquee::catalog::{Catalog, CatalogCache, CatalogError, MovieRecord, REQUIRED_COLUMNS};
use marquee::config::Config;
use marquee::engine::{RecommendError, Recommender, Tokenizer, DEFAULT_TOP_N};
use marquee::output::{markdown, terminal};

/// Marquee: plot-based movie recommendations for a local catalog.
///
/// Point it at a CSV of movies and it finds the titles whose plot
/// summaries read most like the one you pick.
#[derive(Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the catalog file: schema, row counts, duplicate titles
    Validate,

    /// List the titles available for recommendation (the picker)
    List {
        /// Show at most this many titles
        #[arg(long)]
        limit: Option<usize>,

        /// Emit JSON instead of the table view
        #[arg(long)]
        json: bool,
    },

    /// Show one movie's full details
    Show {
        /// The exact title as it appears in the catalog
        title: String,
    },

    /// Recommend movies whose plots read like the given title's
    Recommend {
        /// The exact title as it appears in the catalog
        title: String,

        /// How many recommendations to return
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,

        /// Emit JSON instead of the card view
        #[arg(long)]
        json: bool,

        /// Also write a markdown report to this path
        #[arg(long)]
        report: Option<String>,
    },

    /// Catalog and similarity-index statistics
    Stats,
}

/// One row of `list --json` output.
#[derive(Serialize)]
struct TitleRow<'a> {
    title: &'a str,
    year: Option<i32>,
    imdb_rating: Option<f64>,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("marquee=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let cache = CatalogCache::new(&config.catalog_path);

    match cli.command {
        Commands::Validate => {
            let catalog = load_catalog(&cache, &config)?;

            println!("Catalog: {}", config.catalog_path);
            println!(
                "  Schema: all {} required columns present",
                REQUIRED_COLUMNS.len()
            );
            println!("  Rows: {}", catalog.len());
            println!("  With overview (eligible): {}", catalog.eligible_count());
            println!(
                "  Missing overview: {}",
                catalog.len() - catalog.eligible_count()
            );

            let placeholder_posters = catalog
                .records()
                .iter()
                .filter(|record| record.poster().needs_placeholder())
                .count();
            println!(
                "  Missing/malformed posters: {placeholder_posters} (placeholder image will be shown)"
            );

            let duplicates = catalog.duplicate_title_count();
            if duplicates > 0 {
                println!(
                    "  {} {duplicates} duplicate titles — lookups bind to the first occurrence",
                    "Note:".yellow()
                );
            }

            if !catalog.is_empty() {
                println!("\nCatalog is ready. Next: cargo run -- list");
            }
        }

        Commands::List { limit, json } => {
            let catalog = load_catalog(&cache, &config)?;

            let all_eligible = catalog.eligible_count();
            let mut eligible: Vec<&MovieRecord> =
                catalog.eligible().map(|(_, record)| record).collect();
            if let Some(limit) = limit {
                eligible.truncate(limit);
            }

            if json {
                let rows: Vec<TitleRow> = eligible
                    .iter()
                    .map(|record| TitleRow {
                        title: &record.title,
                        year: record.release_year(),
                        imdb_rating: record.imdb_rating,
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                terminal::display_title_list(&eligible);
                if eligible.len() < all_eligible {
                    println!(
                        "  (showing {} of {all_eligible} — raise --limit to see more)",
                        eligible.len()
                    );
                }
            }
        }

        Commands::Show { title } => {
            let catalog = load_catalog(&cache, &config)?;

            match catalog.find(&title) {
                Some(record) => {
                    terminal::display_movie_detail(record, &config.placeholder_poster_url);
                }
                None => {
                    println!(
                        "{} no movie titled \"{title}\" in the catalog (titles are case-sensitive)",
                        "Warning:".yellow()
                    );
                }
            }
        }

        Commands::Recommend {
            title,
            top_n,
            json,
            report,
        } => {
            let catalog = load_catalog(&cache, &config)?;
            if catalog.is_empty() {
                // Already warned; no titles exist to query against.
                return Ok(());
            }

            let recommender = Recommender::new(&catalog);
            match recommender.recommend(&title, top_n) {
                Ok(results) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&results)?);
                    } else {
                        terminal::display_recommendations(
                            &title,
                            &results,
                            &config.placeholder_poster_url,
                        );
                    }

                    if let Some(report_path) = report {
                        let saved = markdown::generate_report(
                            &title,
                            &results,
                            &config.placeholder_poster_url,
                            &report_path,
                        )?;
                        println!("{}", format!("Markdown report saved to: {saved}").bold());
                    }
                }
                Err(err @ RecommendError::TitleNotFound(_)) => {
                    // Recoverable: warn and return an empty result, never crash.
                    if json {
                        eprintln!("{} {err}", "Warning:".yellow());
                        println!("[]");
                    } else {
                        println!("{} {err}", "Warning:".yellow());
                        println!("Run `marquee list` to see the selectable titles.");
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }

        Commands::Stats => {
            let catalog = load_catalog(&cache, &config)?;

            println!("Catalog: {}", config.catalog_path);
            println!("  Rows: {}", catalog.len());
            println!("  Eligible (with overview): {}", catalog.eligible_count());

            if catalog.eligible_count() == 0 {
                println!("  Nothing to index — no overviews on file.");
                return Ok(());
            }

            let recommender = Recommender::new(&catalog);
            println!(
                "  Vocabulary: {} distinct terms after stop word removal",
                recommender.vocabulary_size()
            );

            let tokenizer = Tokenizer::default();
            let token_counts: Vec<usize> = catalog
                .eligible()
                .map(|(_, record)| {
                    tokenizer
                        .tokenize(record.overview_text().unwrap_or_default())
                        .len()
                })
                .collect();
            let mean_tokens =
                token_counts.iter().sum::<usize>() as f64 / token_counts.len() as f64;
            println!("  Mean content tokens per overview: {mean_tokens:.1}");
        }
    }

    Ok(())
}

/// Load the catalog through the process-wide cache, translating load
/// failures into user-facing messages.
fn load_catalog(cache: &CatalogCache, config: &Config) -> Result<Arc<Catalog>> {
    match cache.get_or_load() {
        Ok(catalog) => {
            if catalog.is_empty() {
                println!(
                    "{} catalog at {} has no rows — no titles to select",
                    "Warning:".yellow(),
                    config.catalog_path
                );
            }
            Ok(catalog)
        }
        Err(err @ CatalogError::Missing { .. }) => {
            anyhow::bail!(
                "{err}\nSet MARQUEE_CATALOG in your .env or place movies.csv in the working directory."
            )
        }
        Err(err) => Err(err.into()),
    }
}
