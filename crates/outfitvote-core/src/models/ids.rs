//! UUID-based identifiers.
//!
//! # Examples
//!
//! ```
//! use outfitvote_core::models::{ClothingId, OutfitId};
//!
//! let item = ClothingId::new();
//! assert!(!item.0.is_empty());
//!
//! let outfit = OutfitId::from("1");
//! assert_eq!(outfit.to_string(), "1");
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
        #[ts(export)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new identifier with a random UUID v4.
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(
    /// Identifier of a clothing item in the closet.
    ClothingId
);

string_id!(
    /// Identifier of a composed outfit.
    OutfitId
);
