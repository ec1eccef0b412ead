//! # callsheet-types
//!
//! Shared type definitions for the call sheet editor.
//! This crate holds the document model, the constrained-input field rules
//! (time of day, page eighths, comma-separated autocomplete), the action
//! enums, and the pure reducers that apply actions to a `CallSheet`.

pub mod action;
pub mod dispatch;
pub mod fields;
pub mod reduce;
pub mod state;

pub use action::*;
pub use dispatch::Dispatcher;
pub use fields::{PageCount, Period, TimeField};

// Re-export all state types at crate root for convenience
pub use state::*;

/// Identifier for a row in one of the sheet's lists.
///
/// Issued by `CallSheet::next_id`; unique within a document, never reused
/// while the document is open.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
