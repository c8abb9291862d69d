// Single source of truth for all default values.

// --- Upload ---
pub const DEFAULT_UPLOAD_DELAY_MS: u64 = 1_500;
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024; // 10 MiB

// --- Composer ---
pub const DEFAULT_SAVE_DELAY_MS: u64 = 1_000;
pub const DEFAULT_OUTFIT_NAME_PREFIX: &str = "Outfit";

// --- Voting ---
pub const DEFAULT_SHARE_BASE_URL: &str = "https://outfitvote.app/vote";
pub const DEFAULT_SHARE_TOKEN_LEN: usize = 8;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Workflow ---
pub const DEFAULT_SEED_MOCK_DATA: bool = true;
