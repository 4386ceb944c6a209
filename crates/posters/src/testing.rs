//! Offline stand-ins for the poster network, enabled by the `test-support`
//! feature.

use crate::source::{FetchError, ImageSource};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canned responses keyed by URL; unknown URLs fail with a 404.
///
/// Counts every fetch so callers can check how many downloads a view
/// triggered.
#[derive(Debug, Default)]
pub struct MemoryImageSource {
    responses: HashMap<String, Result<Vec<u8>, FetchError>>,
    fetches: AtomicUsize,
}

impl MemoryImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `bytes` for `url` (builder pattern)
    pub fn with_image(mut self, url: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.responses.insert(url.into(), Ok(bytes));
        self
    }

    /// Fail every fetch of `url` with `error`
    pub fn with_error(mut self, url: impl Into<String>, error: FetchError) -> Self {
        self.responses.insert(url.into(), Err(error));
        self
    }

    /// Number of fetches attempted so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ImageSource for MemoryImageSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.responses
            .get(url)
            .cloned()
            .unwrap_or(Err(FetchError::Status(404)))
    }
}

/// Encode a blank PNG of the given size
pub fn test_png(width: u32, height: u32) -> image::ImageResult<Vec<u8>> {
    let img = image::DynamicImage::new_rgb8(width, height);
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_source() {
        let source = MemoryImageSource::new()
            .with_image("http://p/1.png", vec![1, 2, 3])
            .with_error("http://p/slow.png", FetchError::Timeout);

        assert_eq!(source.fetch("http://p/1.png").await, Ok(vec![1, 2, 3]));
        assert_eq!(source.fetch("http://p/slow.png").await, Err(FetchError::Timeout));
        assert_eq!(source.fetch("http://p/none.png").await, Err(FetchError::Status(404)));
        assert_eq!(source.fetch_count(), 3);
    }

    #[test]
    fn test_png_has_requested_size() {
        let bytes = test_png(5, 7).unwrap();
        let img = image::load_from_memory(&bytes).unwrap();

        assert_eq!((img.width(), img.height()), (5, 7));
    }
}
