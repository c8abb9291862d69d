//! # outfitvote-closet
//!
//! The closet builder: the first workflow step.
//!
//! ## Modules
//!
//! - `closet`: `Closet`, the ordered clothing collection plus uploaded blobs
//! - `upload`: Upload validation producing an `UploadRequest`
//! - `seed`: The mock closet a fresh session starts from

pub mod closet;
pub mod seed;
pub mod upload;

pub use closet::Closet;
pub use upload::{validate_upload, UploadRequest};
