//! # Data Loader Crate
//!
//! This crate loads the precomputed UMAP + DBSCAN results and the movie
//! metadata they join against.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (EmbeddingRecord, MovieMetadata, DataStore)
//! - **parser**: Parse the CSV files and normalize their schema
//! - **store**: Load both tables and cache them for the process lifetime
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{DataPaths, DataStore};
//!
//! let store = DataStore::shared(&DataPaths::in_dir("."))?;
//!
//! let reference = store.find_embedding(114709).unwrap();
//! let neighbours = store.cluster_members(reference.cluster);
//! let poster = store.find_metadata(114709).and_then(|m| m.poster_url.as_deref());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod store;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{EmbeddingSchema, MetadataSchema};
pub use types::{
    // Type aliases
    EntityId,
    ClusterLabel,
    // Core types
    EmbeddingRecord,
    MovieMetadata,
    DataPaths,
    DataStore,
    // Constants
    NOISE_CLUSTER,
    EMBEDDINGS_FILE,
    METADATA_FILE,
};
