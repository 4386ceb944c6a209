//! Explorer crate for the UMAP + DBSCAN movie cluster explorer.
//!
//! This crate contains the orchestrator that ties loading, filtering,
//! sampling and poster resolution together, plus its configuration and the
//! image-upload stub.

pub mod config;
pub mod orchestrator;
pub mod upload;

pub use config::ExplorerConfig;
pub use orchestrator::{
    ClusterExplorer, ClusterGallery, GalleryContent, PosterGallery, SimilarGallery,
    SkippedPoster, EMPTY_CLUSTER_MESSAGE,
};
pub use upload::{UploadError, UploadPreview, ACCEPTED_UPLOAD_EXTENSIONS, VISUAL_SEARCH_UNAVAILABLE};
