use std::env;

use anyhow::Result;

/// Catalog path used when MARQUEE_CATALOG is not set.
pub const DEFAULT_CATALOG_PATH: &str = "./movies.csv";

/// Image substituted for rows whose poster cell is empty or malformed.
pub const DEFAULT_PLACEHOLDER_POSTER: &str =
    "https://via.placeholder.com/300x450.png?text=No+Poster";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so all subcommands work out of the box against
/// a `movies.csv` in the working directory.
pub struct Config {
    /// Path to the catalog CSV file
    pub catalog_path: String,
    /// URL rendered in place of a missing or malformed poster
    pub placeholder_poster_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            catalog_path: env::var("MARQUEE_CATALOG")
                .unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string()),
            placeholder_poster_url: env::var("MARQUEE_PLACEHOLDER_POSTER")
                .unwrap_or_else(|_| DEFAULT_PLACEHOLDER_POSTER.to_string()),
        })
    }
}
