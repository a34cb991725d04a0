//! Error types for manifest and texture loading.

use thiserror::Error;

/// Failure while fetching or reading a panorama coordinate manifest.
///
/// Malformed rows are not an error: numeric fields that fail to parse become
/// NaN and propagate, matching the host viewer's historical behavior.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to fetch manifest from {url}")]
    Fetch {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
}

/// Failure while loading a panorama texture.
///
/// Carried through [`crate::scene::TextureCompletion`] rather than raised;
/// the focus controller falls back to the last known-good texture.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TextureError {
    #[error("failed to fetch texture {file}: {message}")]
    Fetch { file: String, message: String },
}
