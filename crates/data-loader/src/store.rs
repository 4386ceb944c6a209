//! DataStore loading and process-wide caching.
//!
//! Loading steps:
//! 1. Parse both CSV files in parallel (rayon::join)
//! 2. Normalize column names into the internal schema (done by the parser)
//! 3. Build the first-match metadata index
//!
//! The result is immutable. [`DataStore::shared`] keeps one instance for the
//! whole process so re-filtering never goes back to disk.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::sync::{Arc, OnceLock};
use tracing::info;

static SHARED_STORE: OnceLock<Arc<DataStore>> = OnceLock::new();

impl DataStore {
    /// Load both tables from disk.
    ///
    /// Any missing or malformed file fails the whole load.
    pub fn load_from_files(paths: &DataPaths) -> Result<Self> {
        info!(
            embeddings = %paths.embeddings.display(),
            metadata = %paths.metadata.display(),
            "Loading explorer dataset"
        );

        let (embeddings, metadata) = rayon::join(
            || parser::parse_embeddings(&paths.embeddings),
            || parser::parse_metadata(&paths.metadata),
        );
        let embeddings = embeddings?;
        let metadata = metadata?;

        info!(
            "Loaded {} embedding rows, {} metadata rows",
            embeddings.len(),
            metadata.len()
        );

        Ok(DataStore::new(embeddings, metadata))
    }

    /// Process-wide store, loaded on first call.
    ///
    /// Later calls return the same `Arc` and ignore `paths`; there is no
    /// reload path. A failed first load leaves the cache empty.
    pub fn shared(paths: &DataPaths) -> Result<Arc<DataStore>> {
        if let Some(store) = SHARED_STORE.get() {
            return Ok(Arc::clone(store));
        }

        let loaded = Arc::new(Self::load_from_files(paths)?);
        // If another thread won the race, its instance is the one kept
        Ok(Arc::clone(SHARED_STORE.get_or_init(|| loaded)))
    }
}
