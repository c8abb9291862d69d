//! Closet: the accumulated clothing collection.

use std::collections::HashMap;

use outfitvote_core::config::defaults::DEFAULT_MAX_IMAGE_BYTES;
use outfitvote_core::errors::OutfitResult;
use outfitvote_core::models::{ClothingId, ClothingItem, ImageBlob, ImageRef};
use tracing::debug;

use crate::seed;
use crate::upload::{validate_upload, UploadRequest};

/// Ordered collection of clothing items plus the blobs they were uploaded from.
///
/// Items are append-only: nothing is edited or removed once added.
#[derive(Debug, Clone)]
pub struct Closet {
    items: Vec<ClothingItem>,
    blobs: HashMap<ImageRef, ImageBlob>,
    max_image_bytes: usize,
}

impl Closet {
    /// An empty closet with the given upload size limit.
    pub fn new(max_image_bytes: usize) -> Self {
        Self {
            items: Vec::new(),
            blobs: HashMap::new(),
            max_image_bytes,
        }
    }

    /// A closet pre-filled with the mock clothes.
    pub fn seeded(max_image_bytes: usize) -> Self {
        Self::with_items(seed::mock_clothes(), max_image_bytes)
    }

    /// A closet holding existing items (e.g. loaded from fixtures).
    pub fn with_items(items: Vec<ClothingItem>, max_image_bytes: usize) -> Self {
        Self {
            items,
            blobs: HashMap::new(),
            max_image_bytes,
        }
    }

    /// Validate an upload without touching the closet.
    pub fn validate(&self, name: &str, image: Option<ImageBlob>) -> OutfitResult<UploadRequest> {
        Ok(validate_upload(name, image, self.max_image_bytes)?)
    }

    /// Append a validated upload and return the new item.
    pub fn commit(&mut self, request: UploadRequest) -> ClothingItem {
        let image = ImageRef::new_blob();
        let item = ClothingItem {
            id: ClothingId::new(),
            name: request.name,
            image: image.clone(),
        };
        self.blobs.insert(image, request.blob);
        self.items.push(item.clone());
        debug!(
            item_id = %item.id,
            total = self.items.len(),
            "clothing item committed"
        );
        item
    }

    /// Validate and append in one step. On failure the closet is unchanged.
    pub fn add_clothing_item(
        &mut self,
        name: &str,
        image: Option<ImageBlob>,
    ) -> OutfitResult<ClothingItem> {
        let request = self.validate(name, image)?;
        Ok(self.commit(request))
    }

    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn get(&self, id: &ClothingId) -> Option<&ClothingItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ClothingId) -> bool {
        self.get(id).is_some()
    }

    /// Resolve an uploaded image. External URLs have no blob.
    pub fn image_data(&self, image: &ImageRef) -> Option<&ImageBlob> {
        self.blobs.get(image)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_image_bytes(&self) -> usize {
        self.max_image_bytes
    }
}

impl Default for Closet {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGE_BYTES)
    }
}
