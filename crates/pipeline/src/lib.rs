//! Filter engine for the embedding table.
//!
//! This crate provides:
//! - Filter trait and the genre/cluster equality filters
//! - FilterPipeline for composing filters (AND semantics)
//! - Selection parsing for the "All" sentinel
//! - SelectorOptions derived from the unfiltered table
//! - Scatter projection of the filtered rows
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, Selection, SelectorOptions, scatter_points};
//!
//! let options = SelectorOptions::from_records(store.embeddings());
//!
//! let pipeline = FilterPipeline::for_selection(
//!     &Selection::genre("Drama"),
//!     &Selection::cluster("All")?,
//! );
//! let filtered = pipeline.apply_to(store.embeddings())?;
//! let points = scatter_points(&filtered);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod selection;
pub mod options;
pub mod scatter;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use selection::{Selection, SelectionError, ALL_LABEL};
pub use options::SelectorOptions;
pub use scatter::{scatter_points, ScatterPoint};
