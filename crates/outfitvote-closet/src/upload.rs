//! Upload validation.
//!
//! Validation runs before any simulated latency is scheduled, so a rejected
//! upload never occupies the upload action.

use outfitvote_core::errors::ValidationError;
use outfitvote_core::models::ImageBlob;

/// An upload that passed validation and is ready to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Trimmed, non-empty item name.
    pub name: String,
    pub blob: ImageBlob,
}

/// Validate a name and an optional image.
///
/// Fails with `EmptyName` for blank names, `MissingImage` when no image (or
/// an empty file) was supplied, `UnsupportedImageType` for non-image MIME
/// types and `ImageTooLarge` above `max_image_bytes`.
pub fn validate_upload(
    name: &str,
    image: Option<ImageBlob>,
    max_image_bytes: usize,
) -> Result<UploadRequest, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let blob = match image {
        Some(blob) if !blob.is_empty() => blob,
        _ => return Err(ValidationError::MissingImage),
    };

    if !blob.is_image() {
        return Err(ValidationError::UnsupportedImageType {
            mime_type: blob.mime_type,
        });
    }

    if blob.len() > max_image_bytes {
        return Err(ValidationError::ImageTooLarge {
            size: blob.len(),
            max: max_image_bytes,
        });
    }

    Ok(UploadRequest {
        name: name.to_string(),
        blob,
    })
}
