//! Image-upload stub.
//!
//! Uploaded posters are decoded and previewed, nothing more. Content-based
//! search would plug in here: extract visual features from the upload and
//! compare them against the existing clusters.

use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Extensions the upload control accepts (compared case-insensitively)
pub const ACCEPTED_UPLOAD_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

/// Shown for every upload
pub const VISUAL_SEARCH_UNAVAILABLE: &str = "Image search is not implemented in this \
    demonstration version, but this is where visual features could be extracted \
    and compared against the existing clusters.";

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Unsupported upload {file}: expected one of jpg, png, jpeg")]
    UnsupportedFormat { file: String },

    #[error("Could not read image {file}: {reason}")]
    Unreadable { file: String, reason: String },
}

/// What the UI shows after an upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPreview {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub message: &'static str,
}

pub fn is_accepted_upload(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ACCEPTED_UPLOAD_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

/// Decode the upload for preview and attach the static message
pub fn preview_upload(path: &Path) -> Result<UploadPreview, UploadError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    if !is_accepted_upload(path) {
        return Err(UploadError::UnsupportedFormat { file: file_name });
    }

    let unreadable = |reason: String| UploadError::Unreadable {
        file: file_name.clone(),
        reason,
    };
    // Sniff the format from the bytes; the extension only gates the upload
    let img = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| unreadable(e.to_string()))?
        .decode()
        .map_err(|e| unreadable(e.to_string()))?;
    info!("Previewing upload {} ({}x{})", file_name, img.width(), img.height());

    Ok(UploadPreview {
        file_name,
        width: img.width(),
        height: img.height(),
        message: VISUAL_SEARCH_UNAVAILABLE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extensions() {
        assert!(is_accepted_upload(Path::new("poster.jpg")));
        assert!(is_accepted_upload(Path::new("poster.JPEG")));
        assert!(is_accepted_upload(Path::new("dir/poster.png")));
        assert!(!is_accepted_upload(Path::new("poster.gif")));
        assert!(!is_accepted_upload(Path::new("poster")));
    }

    #[test]
    fn test_preview_upload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.png");
        std::fs::write(&path, posters::test_png(8, 12).unwrap()).unwrap();

        let preview = preview_upload(&path).unwrap();

        assert_eq!(preview.file_name, "upload.png");
        assert_eq!((preview.width, preview.height), (8, 12));
        assert_eq!(preview.message, VISUAL_SEARCH_UNAVAILABLE);
    }

    #[test]
    fn test_rejects_other_formats() {
        let err = preview_upload(Path::new("clip.gif")).unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_corrupt_upload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        assert!(matches!(
            preview_upload(&path).unwrap_err(),
            UploadError::Unreadable { .. }
        ));
    }
}
