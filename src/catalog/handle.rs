//! Shared catalog handle with atomic reload

use crate::catalog::store::CatalogStore;
use crate::error::{CareerMatcherError, Result};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Process-wide handle to the current catalog.
///
/// Readers take a snapshot (`Arc` clone) and keep using it for the whole
/// request. A reload builds the replacement store completely before swapping
/// it in, so a snapshot is always a consistent records + vocabulary pair.
#[derive(Debug)]
pub struct CatalogHandle {
    source: Option<PathBuf>,
    current: RwLock<Arc<CatalogStore>>,
}

impl CatalogHandle {
    /// Load the catalog at `path` and remember it as the reload source.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let store = CatalogStore::load(&path)?;
        Ok(Self {
            source: Some(path),
            current: RwLock::new(Arc::new(store)),
        })
    }

    /// Wrap an in-memory store. Such a handle can only be refreshed with
    /// [`replace`](Self::replace).
    pub fn from_store(store: CatalogStore) -> Self {
        Self {
            source: None,
            current: RwLock::new(Arc::new(store)),
        }
    }

    pub fn snapshot(&self) -> Arc<CatalogStore> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Re-read the catalog source. On failure the current catalog stays in place.
    pub fn reload(&self) -> Result<Arc<CatalogStore>> {
        let path = self.source.as_ref().ok_or_else(|| {
            CareerMatcherError::DataLoad("catalog has no source file to reload from".to_string())
        })?;

        let store = CatalogStore::load(path)?;
        info!("Reloaded career catalog from {}", path.display());
        Ok(self.replace(store))
    }

    /// Swap in a new store and return it.
    pub fn replace(&self, store: CatalogStore) -> Arc<CatalogStore> {
        let fresh = Arc::new(store);
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Arc::clone(&fresh);
        fresh
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
