//! Poster resolution for the cluster explorer.
//!
//! This crate turns sampled embedding rows into poster images:
//! - Joins the row to its first metadata row to find the poster URL
//! - Downloads the image over HTTP with a bounded timeout
//! - Decodes it to confirm it really is an image
//!
//! Failures are reported as [`SkipReason`]s, never as errors.

pub mod source;
pub mod resolver;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use source::{DEFAULT_FETCH_TIMEOUT, FetchError, HttpImageSource, ImageSource};
pub use resolver::{Poster, PosterOutcome, PosterResolver, SkipReason};
#[cfg(any(test, feature = "test-support"))]
pub use testing::{test_png, MemoryImageSource};
