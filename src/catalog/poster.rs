// Poster URL validation — the placeholder-image boundary.
//
// Whether a poster cell is usable is an explicit tagged classification,
// not a truthiness check, so the substitution behavior stays testable.
// Missing and malformed cells both render as the placeholder image and
// are never surfaced as errors.

use url::Url;

/// Classification of a catalog row's poster_url cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosterUrl {
    /// Well-formed absolute http(s) URL
    Valid(String),
    /// Cell was empty or absent
    Missing,
    /// Cell was present but is not a well-formed http(s) URL
    Malformed,
}

impl PosterUrl {
    /// Classify a raw poster cell.
    pub fn classify(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return PosterUrl::Missing;
        };
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                PosterUrl::Valid(raw.to_string())
            }
            _ => PosterUrl::Malformed,
        }
    }

    /// The URL to render: the poster itself, or the placeholder for a
    /// missing/malformed cell.
    pub fn display_url<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self {
            PosterUrl::Valid(url) => url,
            PosterUrl::Missing | PosterUrl::Malformed => placeholder,
        }
    }

    /// True when the placeholder will be shown instead of a real poster.
    pub fn needs_placeholder(&self) -> bool {
        !matches!(self, PosterUrl::Valid(_))
    }
}
