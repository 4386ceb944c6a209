//! # Sampler Crate
//!
//! This crate picks which movies the explorer shows.
//!
//! ## Components
//!
//! ### Cluster Sampler
//! Representative movies for every cluster of the filtered view:
//! - Up to 6 movies per cluster, drawn without replacement
//! - Clusters visited in ascending label order
//!
//! ### Similarity Recommender
//! "More like this" for one selected movie:
//! - Same DBSCAN cluster as the selected movie
//! - Drawn with replacement from the unfiltered table
//!
//! ### Layout
//! Deals the picks into a 3-column grid.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sampler::{ClusterSampler, SimilarityRecommender};
//!
//! let mut rng = rand::rng();
//! let samples = ClusterSampler::new().sample_all(&filtered, &mut rng);
//!
//! let recommender = SimilarityRecommender::new(store.clone());
//! let similar = recommender.recommend(114709, &mut rng)?;
//! ```
//!
//! Both entry points take the RNG as a parameter so tests can pass a
//! seeded `StdRng`.

// Public modules
pub mod types;
pub mod cluster_sampler;
pub mod recommender;
pub mod layout;

// Re-export commonly used types
pub use types::{ClusterPicks, ClusterSample, Recommendation};
pub use cluster_sampler::{ClusterSampler, DEFAULT_SAMPLE_SIZE};
pub use recommender::{RecommendError, SimilarityRecommender};
pub use layout::{PosterGrid, DEFAULT_GRID_COLUMNS};
