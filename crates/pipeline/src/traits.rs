//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible predicates to be applied to the embedding table.

use anyhow::Result;
use data_loader::EmbeddingRecord;

/// Core trait for filtering embedding rows.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Filters work on borrowed rows: the store is never copied, a filtered
///   view is just a `Vec` of references into it
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of rows.
    ///
    /// # Arguments
    /// * `rows` - The rows to filter (takes ownership of the view)
    ///
    /// # Returns
    /// * `Ok(Vec<&EmbeddingRecord>)` - The rows that satisfy the predicate
    /// * `Err` - If filtering fails
    fn apply<'a>(&self, rows: Vec<&'a EmbeddingRecord>) -> Result<Vec<&'a EmbeddingRecord>>;
}
