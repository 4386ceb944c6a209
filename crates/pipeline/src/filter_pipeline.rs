//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! equality filters together using the builder pattern. Chained filters
//! are ANDed: a row survives only if every filter keeps it.

use crate::filters::{ClusterFilter, GenreFilter};
use crate::selection::Selection;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::{ClusterLabel, EmbeddingRecord};

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new("Drama"))
///     .add_filter(ClusterFilter::new(3));
///
/// let filtered = pipeline.apply_to(store.embeddings())?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for the current selector values.
    ///
    /// "All" adds no filter for that dimension, so `All`/`All` yields an
    /// empty pipeline that passes the table through untouched.
    pub fn for_selection(genre: &Selection<String>, cluster: &Selection<ClusterLabel>) -> Self {
        let mut pipeline = Self::new();
        if let Selection::Only(genre) = genre {
            pipeline = pipeline.add_filter(GenreFilter::new(genre.clone()));
        }
        if let Selection::Only(cluster) = cluster {
            pipeline = pipeline.add_filter(ClusterFilter::new(*cluster));
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the chain
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the rows.
    ///
    /// Row order is preserved but carries no meaning downstream.
    pub fn apply<'a>(&self, rows: Vec<&'a EmbeddingRecord>) -> Result<Vec<&'a EmbeddingRecord>> {
        let mut current = rows;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }

    /// Apply the pipeline to a whole table
    pub fn apply_to<'a>(&self, table: &'a [EmbeddingRecord]) -> Result<Vec<&'a EmbeddingRecord>> {
        self.apply(table.iter().collect())
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
