//! Where poster bytes come from.
//!
//! [`ImageSource`] is the seam between the resolver and the network:
//! production code uses [`HttpImageSource`], tests use the in-memory fake
//! from the `testing` module.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Upper bound for one poster download, connect to last byte
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur while downloading a poster
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

/// Anything that can turn a poster URL into raw bytes
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Plain HTTP GET, no auth, no retries.
#[derive(Clone)]
pub struct HttpImageSource {
    client: reqwest::Client,
}

impl HttpImageSource {
    /// Build a client whose every request is bounded by `timeout`
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        info!("Creating poster HTTP client (timeout {:?})", timeout);
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_http_source_rejects_invalid_url() {
        let source = HttpImageSource::new(DEFAULT_FETCH_TIMEOUT).unwrap();

        let err = source.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }
}
