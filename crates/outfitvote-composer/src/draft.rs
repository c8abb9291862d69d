use outfitvote_core::models::{ClothingId, Day};

/// An outfit being composed for one day.
///
/// The selection keeps the order items were picked in; toggling a selected
/// item removes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitDraft {
    pub day: Day,
    pub name: String,
    selection: Vec<ClothingId>,
}

impl OutfitDraft {
    pub fn new(day: Day, name: impl Into<String>) -> Self {
        Self {
            day,
            name: name.into(),
            selection: Vec::new(),
        }
    }

    /// Select or deselect an item. Returns whether it is now selected.
    pub fn toggle(&mut self, id: &ClothingId) -> bool {
        if let Some(pos) = self.selection.iter().position(|s| s == id) {
            self.selection.remove(pos);
            false
        } else {
            self.selection.push(id.clone());
            true
        }
    }

    pub fn is_selected(&self, id: &ClothingId) -> bool {
        self.selection.contains(id)
    }

    pub fn selection(&self) -> &[ClothingId] {
        &self.selection
    }
}
