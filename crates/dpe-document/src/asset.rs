//! Images embedded in the report as `data:` URIs.

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Asset loading error.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file extension does not map to an image type.
    #[error("{} is not an image ({mime})", path.display())]
    NotAnImage { path: PathBuf, mime: String },
}

/// An image held in memory with its MIME type.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAsset")
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageAsset {
    #[must_use]
    pub fn new(mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            bytes,
        }
    }

    /// Read an image file, guessing its MIME type from the extension.
    pub fn from_path(path: &Path) -> Result<Self, AssetError> {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        if mime.type_() != mime_guess::mime::IMAGE {
            return Err(AssetError::NotAnImage {
                path: path.to_path_buf(),
                mime: mime.to_string(),
            });
        }
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(mime.essence_str(), bytes))
    }

    /// Read an optional image, logging and returning `None` on failure.
    #[must_use]
    pub fn load_best_effort(path: &Path) -> Option<Self> {
        match Self::from_path(path) {
            Ok(asset) => Some(asset),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable image");
                None
            }
        }
    }

    /// `data:<mime>;base64,<payload>`.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, BASE64.encode(&self.bytes))
    }
}

/// A building photo with an optional caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub image: ImageAsset,
    pub caption: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_data_uri() {
        let asset = ImageAsset::new("image/png", b"abc".to_vec());
        assert_eq!(asset.data_uri(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_from_path_guesses_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.jpg");
        std::fs::write(&path, [0xff, 0xd8, 0xff]).unwrap();

        let asset = ImageAsset::from_path(&path).unwrap();

        assert_eq!(asset.mime, "image/jpeg");
        assert_eq!(asset.bytes, vec![0xff, 0xd8, 0xff]);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ImageAsset::from_path(Path::new("/nonexistent/cover.png")).unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn test_from_path_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = ImageAsset::from_path(&path).unwrap_err();
        assert!(matches!(err, AssetError::NotAnImage { .. }));
    }

    #[test]
    fn test_load_best_effort_missing_is_none() {
        assert!(ImageAsset::load_best_effort(Path::new("/nonexistent/cover.png")).is_none());
    }
}
