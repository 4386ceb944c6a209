//! Filter implementations for the embedding table.
//!
//! This module contains the concrete equality filters that can be
//! composed into a FilterPipeline.

pub mod cluster;
pub mod genre;

// Re-export for convenience
pub use cluster::ClusterFilter;
pub use genre::GenreFilter;
