//! Image references and upload payloads.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{BLOB_REF_SCHEME, IMAGE_MIME_PREFIX};

/// Opaque reference to an image: an external URL or an uploaded blob.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImageRef(pub String);

impl ImageRef {
    /// Reference an external URL.
    pub fn url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Mint a fresh reference for an uploaded blob.
    pub fn new_blob() -> Self {
        Self(format!("{BLOB_REF_SCHEME}{}", uuid::Uuid::new_v4()))
    }

    pub fn is_blob(&self) -> bool {
        self.0.starts_with(BLOB_REF_SCHEME)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An image file as received from a picker or a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageBlob {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Whether the declared MIME type is an image type.
    pub fn is_image(&self) -> bool {
        self.mime_type
            .trim()
            .to_ascii_lowercase()
            .starts_with(IMAGE_MIME_PREFIX)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
