//! Core domain types for the embedding and movie metadata tables.
//!
//! This module defines the fundamental data structures used throughout the system.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (EntityId, ClusterLabel)
//! - `Option<T>` for cells that may be empty in the source CSV
//! - HashMap for the first-match join index

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// =============================================================================
// Type Aliases
// =============================================================================

/// Catalog identifier shared by both tables (the IMDb id)
pub type EntityId = i64;

/// Cluster assignment produced upstream by DBSCAN
pub type ClusterLabel = i32;

/// DBSCAN's label for unclustered points.
///
/// Only informational: the explorer treats it as an ordinary cluster id.
pub const NOISE_CLUSTER: ClusterLabel = -1;

/// Default file name of the embedding/cluster results
pub const EMBEDDINGS_FILE: &str = "umap_dbscan_resultados.csv";

/// Default file name of the Latin-1 encoded movie metadata
pub const METADATA_FILE: &str = "MovieGenre.csv";

// =============================================================================
// Records
// =============================================================================

/// One row of the embedding table: a movie placed in 2D with its cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRecord {
    pub entity_id: EntityId,
    pub x: f64,
    pub y: f64,
    /// `None` when the genre cell was empty
    pub genre: Option<String>,
    pub cluster: ClusterLabel,
}

/// One row of the movie metadata table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieMetadata {
    pub entity_id: EntityId,
    pub title: Option<String>,
    pub genre: Option<String>,
    /// Poster image URL; may be absent or point nowhere
    pub poster_url: Option<String>,
}

// =============================================================================
// Paths
// =============================================================================

/// Locations of the two input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub embeddings: PathBuf,
    pub metadata: PathBuf,
}

impl DataPaths {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            embeddings: dir.join(EMBEDDINGS_FILE),
            metadata: dir.join(METADATA_FILE),
        }
    }

    pub fn with_embeddings(mut self, path: impl Into<PathBuf>) -> Self {
        self.embeddings = path.into();
        self
    }

    pub fn with_metadata(mut self, path: impl Into<PathBuf>) -> Self {
        self.metadata = path.into();
        self
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

// =============================================================================
// DataStore - The Immutable In-Memory Tables
// =============================================================================

/// Both tables plus the join index, immutable once built.
///
/// The store is shared behind an `Arc` and never mutated after loading, so
/// every accessor hands out borrows (`&T`, `&[T]`) instead of clones.
#[derive(Debug)]
pub struct DataStore {
    pub(crate) embeddings: Vec<EmbeddingRecord>,
    pub(crate) metadata: Vec<MovieMetadata>,
    /// entity id -> position of its FIRST row in `metadata`
    pub(crate) metadata_index: HashMap<EntityId, usize>,
}

impl DataStore {
    /// Build a store from already parsed tables
    pub fn new(embeddings: Vec<EmbeddingRecord>, metadata: Vec<MovieMetadata>) -> Self {
        let mut metadata_index = HashMap::with_capacity(metadata.len());
        for (pos, movie) in metadata.iter().enumerate() {
            // First match wins, later duplicates are shadowed
            metadata_index.entry(movie.entity_id).or_insert(pos);
        }

        Self {
            embeddings,
            metadata,
            metadata_index,
        }
    }

    /// The full, unfiltered embedding table in file order
    pub fn embeddings(&self) -> &[EmbeddingRecord] {
        &self.embeddings
    }

    /// The full metadata table in file order
    pub fn metadata(&self) -> &[MovieMetadata] {
        &self.metadata
    }

    /// First embedding row with this entity id
    pub fn find_embedding(&self, id: EntityId) -> Option<&EmbeddingRecord> {
        self.embeddings.iter().find(|record| record.entity_id == id)
    }

    /// First metadata row with this entity id
    pub fn find_metadata(&self, id: EntityId) -> Option<&MovieMetadata> {
        self.metadata_index
            .get(&id)
            .and_then(|&pos| self.metadata.get(pos))
    }

    /// All embedding rows carrying the given cluster label
    pub fn cluster_members(&self, cluster: ClusterLabel) -> Vec<&EmbeddingRecord> {
        self.embeddings
            .iter()
            .filter(|record| record.cluster == cluster)
            .collect()
    }

    /// Get counts for debugging/validation: (embedding rows, metadata rows)
    pub fn counts(&self) -> (usize, usize) {
        (self.embeddings.len(), self.metadata.len())
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
