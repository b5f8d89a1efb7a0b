//! Framework-agnostic state machines for the query widgets.
//!
//! These model the interactive pieces of the site (autocomplete inputs, the
//! multi-select tag input and the search modal) as plain synchronous state
//! machines. A UI layer feeds them keystrokes, commits, clicks and blurs;
//! time-dependent behavior takes an explicit `Instant` so tests stay
//! deterministic.

mod autocomplete;
mod search_modal;
mod tag_input;

pub use autocomplete::*;
pub use search_modal::*;
pub use tag_input::*;

/// A selectable option: the label is shown, the value is bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    pub label: String,
    pub value: String,
}

impl OptionItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Case-insensitive substring match used by every widget filter.
pub(crate) fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
