/// User-input validation failures.
///
/// Every variant aborts the operation that produced it and leaves prior state
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("a name is required")]
    EmptyName,

    #[error("an image is required")]
    MissingImage,

    #[error("unsupported file type {mime_type:?}: only images are accepted")]
    UnsupportedImageType { mime_type: String },

    #[error("image is too large: {size} bytes, max {max}")]
    ImageTooLarge { size: usize, max: usize },

    #[error("select at least one clothing item")]
    EmptySelection,

    #[error("unknown clothing item: {id}")]
    UnknownClothingItem { id: String },

    #[error("there are no outfits to vote on")]
    NoOutfits,

    #[error("the closet is empty")]
    EmptyCloset,

    #[error("no votes have been cast")]
    NoVotesCast,

    /// A vote would push a tally past the range of `i64`.
    #[error("vote tally for outfit {outfit_id} is out of range")]
    TallyOverflow { outfit_id: String },
}
