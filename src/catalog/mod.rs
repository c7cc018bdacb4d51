// Catalog loading and validation — the movie dataset subsystem.
//
// A catalog is an ordered list of MovieRecord rows read from a CSV file
// with a fixed header. Rows may carry empty cells (no overview, no poster,
// no rating); such rows stay in the catalog but only rows with an overview
// take part in similarity computation.

pub mod cache;
pub mod loader;
pub mod model;
pub mod poster;

pub use cache::CatalogCache;
pub use loader::{Catalog, CatalogError, REQUIRED_COLUMNS};
pub use model::MovieRecord;
pub use poster::PosterUrl;
