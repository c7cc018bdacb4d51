// Process-wide catalog state with an explicit lifecycle.
//
// The catalog is loaded on first access and reused for every query after
// that; it is invalidated only by an explicit reload. Queries never mutate
// the cached catalog, so readers share one immutable snapshot.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tracing::info;

use super::loader::{Catalog, CatalogError};

pub struct CatalogCache {
    path: PathBuf,
    loaded: RwLock<Option<Arc<Catalog>>>,
}

impl CatalogCache {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            loaded: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cached catalog, loading it from disk on first access.
    pub fn get_or_load(&self) -> Result<Arc<Catalog>, CatalogError> {
        if let Some(catalog) = self.loaded.read().expect("catalog cache poisoned").as_ref() {
            return Ok(Arc::clone(catalog));
        }
        self.reload()
    }

    /// Re-read the catalog from disk, replacing any cached snapshot.
    /// Existing Arc holders keep the snapshot they already have.
    pub fn reload(&self) -> Result<Arc<Catalog>, CatalogError> {
        let catalog = Arc::new(Catalog::load(&self.path)?);
        info!(path = %self.path.display(), rows = catalog.len(), "catalog (re)loaded into cache");
        *self.loaded.write().expect("catalog cache poisoned") = Some(Arc::clone(&catalog));
        Ok(catalog)
    }
}
