//! Poster resolution: embedding row -> metadata -> URL -> decoded image.
//!
//! Every failure along the way is turned into a [`SkipReason`] instead of
//! an error, so one broken poster never stops the rest of a gallery.

use crate::source::{FetchError, ImageSource};
use data_loader::{DataStore, EmbeddingRecord, EntityId};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A poster that was downloaded and decoded successfully
#[derive(Debug, Clone, PartialEq)]
pub struct Poster {
    pub entity_id: EntityId,
    pub url: String,
    /// The embedding row's genre, empty when missing
    pub caption: String,
    pub width: u32,
    pub height: u32,
    /// MIME type detected from the bytes, e.g. `image/jpeg`
    pub mime_type: String,
    pub byte_len: usize,
}

/// Why a sampled row produced no image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entity id has no row in the metadata table
    NoMetadata,
    /// The metadata row has no poster URL
    MissingUrl,
    /// The download exceeded the fetch timeout
    Timeout,
    /// Connection, HTTP or body error
    Fetch(String),
    /// The bytes are not an image we can decode
    Decode(String),
}

impl From<FetchError> for SkipReason {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Timeout => SkipReason::Timeout,
            other => SkipReason::Fetch(other.to_string()),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoMetadata => f.write_str("no metadata row"),
            SkipReason::MissingUrl => f.write_str("no poster URL"),
            SkipReason::Timeout => f.write_str("download timed out"),
            SkipReason::Fetch(reason) => write!(f, "download failed: {}", reason),
            SkipReason::Decode(reason) => write!(f, "not a decodable image: {}", reason),
        }
    }
}

/// Result of resolving one sampled row
#[derive(Debug, Clone, PartialEq)]
pub enum PosterOutcome {
    Resolved(Poster),
    Skipped(SkipReason),
}

impl PosterOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, PosterOutcome::Resolved(_))
    }

    pub fn poster(&self) -> Option<&Poster> {
        match self {
            PosterOutcome::Resolved(poster) => Some(poster),
            PosterOutcome::Skipped(_) => None,
        }
    }

    pub fn into_poster(self) -> Option<Poster> {
        match self {
            PosterOutcome::Resolved(poster) => Some(poster),
            PosterOutcome::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            PosterOutcome::Resolved(_) => None,
            PosterOutcome::Skipped(reason) => Some(reason),
        }
    }
}

/// Resolves sampled rows to posters through an [`ImageSource`].
///
/// Nothing is cached: every call downloads again.
pub struct PosterResolver<S> {
    store: Arc<DataStore>,
    source: S,
}

impl<S: ImageSource> PosterResolver<S> {
    pub fn new(store: Arc<DataStore>, source: S) -> Self {
        Self { store, source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve one row. Never fails; problems become a skip.
    pub async fn resolve(&self, record: &EmbeddingRecord) -> PosterOutcome {
        let outcome = match self.try_resolve(record).await {
            Ok(poster) => PosterOutcome::Resolved(poster),
            Err(reason) => PosterOutcome::Skipped(reason),
        };
        if let PosterOutcome::Skipped(reason) = &outcome {
            debug!(entity_id = record.entity_id, "Skipping poster: {}", reason);
        }
        outcome
    }

    /// Resolve rows one after another, keeping their order.
    pub async fn resolve_all(&self, records: &[EmbeddingRecord]) -> Vec<PosterOutcome> {
        let mut outcomes = Vec::with_capacity(records.len());
        for record in records {
            outcomes.push(self.resolve(record).await);
        }
        outcomes
    }

    async fn try_resolve(&self, record: &EmbeddingRecord) -> Result<Poster, SkipReason> {
        let metadata = self
            .store
            .find_metadata(record.entity_id)
            .ok_or(SkipReason::NoMetadata)?;
        let url = metadata.poster_url.clone().ok_or(SkipReason::MissingUrl)?;

        let bytes = self.source.fetch(&url).await?;
        let byte_len = bytes.len();
        let decoded = tokio::task::spawn_blocking(move || decode(&bytes))
            .await
            .map_err(|e| SkipReason::Decode(e.to_string()))??;

        Ok(Poster {
            entity_id: record.entity_id,
            url,
            caption: record.genre.clone().unwrap_or_default(),
            width: decoded.width,
            height: decoded.height,
            mime_type: decoded.mime_type,
            byte_len,
        })
    }
}

struct DecodedImage {
    width: u32,
    height: u32,
    mime_type: String,
}

fn decode(bytes: &[u8]) -> Result<DecodedImage, SkipReason> {
    let format = image::guess_format(bytes).map_err(|e| SkipReason::Decode(e.to_string()))?;
    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| SkipReason::Decode(e.to_string()))?;

    Ok(DecodedImage {
        width: img.width(),
        height: img.height(),
        mime_type: format.to_mime_type().to_string(),
    })
}
