//! Constrained text inputs.
//!
//! Every stored value on the sheet is a string; these modules hold the rules
//! the editors apply before a string is written back. None of them fail:
//! bad characters are stripped and out-of-range numbers are clamped.

pub mod autocomplete;
pub mod pages;
pub mod time;

pub use pages::{format_total, total_pages, PageCount, MAX_EIGHTHS};
pub use time::{clamp_hours, clamp_minutes, Period, TimeField};
