/// OutfitVote version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of days an outfit can be planned for.
pub const DAYS_PER_WEEK: usize = 7;

/// MIME prefix every uploaded image must carry.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// Scheme prefix for references to uploaded blobs.
pub const BLOB_REF_SCHEME: &str = "blob:";

/// Number of wizard steps that count towards "Step n/3" progress.
/// The results view is reached after the last counted step.
pub const COUNTED_STEPS: usize = 3;
