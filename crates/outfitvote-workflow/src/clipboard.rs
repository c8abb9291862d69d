//! Clipboard implementations for headless use.

use std::sync::Mutex;

use outfitvote_core::errors::{OutfitError, OutfitResult};
use outfitvote_core::traits::Clipboard;

/// Keeps the last written text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> OutfitResult<()> {
        let mut guard = self.contents.lock().map_err(|e| OutfitError::Clipboard {
            reason: e.to_string(),
        })?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

/// A clipboard that refuses every write.
#[derive(Debug, Clone, Default)]
pub struct UnavailableClipboard {
    reason: String,
}

impl UnavailableClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Clipboard for UnavailableClipboard {
    fn write_text(&self, _text: &str) -> OutfitResult<()> {
        Err(OutfitError::Clipboard {
            reason: self.reason.clone(),
        })
    }
}
