//! # outfitvote-workflow
//!
//! Ties the closet, composer, vote session and results together behind a
//! four-step wizard. Delayed actions (upload, save) go through an
//! [`ActionGate`] so a second request cannot start while one is pending.

pub mod clipboard;
pub mod gate;
pub mod notifications;
pub mod step;
pub mod workflow;

pub use clipboard::{MemoryClipboard, UnavailableClipboard};
pub use gate::{ActionGate, ActionKind, PendingAction};
pub use notifications::Notifications;
pub use step::Step;
pub use workflow::Workflow;
