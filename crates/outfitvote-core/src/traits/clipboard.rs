use crate::errors::OutfitResult;

/// System clipboard access used by share actions.
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str) -> OutfitResult<()>;
}
