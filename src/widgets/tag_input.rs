//! Multi-select tag input.
//!
//! Unlike the single-select autocomplete, free-form tags are allowed here.

use std::time::{Duration, Instant};

use super::{matches, OptionItem};

/// Minimum spacing between two tag additions, absorbing duplicate key
/// events from Enter plus comma arriving together.
pub const ADD_THROTTLE: Duration = Duration::from_millis(300);

/// Ordered, duplicate-free tag list fed by an autocomplete-style input.
#[derive(Debug, Clone)]
pub struct TagInput {
    options: Vec<OptionItem>,
    input: String,
    suggestions: Vec<OptionItem>,
    tags: Vec<OptionItem>,
    last_added: Option<Instant>,
}

impl TagInput {
    pub fn new(options: Vec<OptionItem>) -> Self {
        Self {
            options,
            input: String::new(),
            suggestions: Vec::new(),
            tags: Vec::new(),
            last_added: None,
        }
    }

    /// Handle a keystroke: recompute suggestions from the new input text.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();

        if self.input.is_empty() {
            self.suggestions.clear();
            return;
        }

        self.suggestions = self
            .options
            .iter()
            .filter(|o| matches(&o.label, &self.input))
            .cloned()
            .collect();
    }

    pub fn suggestions(&self) -> &[OptionItem] {
        &self.suggestions
    }

    pub fn tags(&self) -> &[OptionItem] {
        &self.tags
    }

    pub fn label(&self) -> &str {
        &self.input
    }

    /// Enter or `,`: add a tag.
    ///
    /// Takes the top suggestion when the list is open and non-empty,
    /// otherwise creates a free-form tag from the trimmed text with a
    /// trailing comma stripped. Returns whether a tag was added.
    pub fn commit(&mut self, now: Instant) -> bool {
        let candidate = match self.suggestions.first().cloned() {
            Some(suggestion) => suggestion,
            None => {
                let text = self.input.trim().trim_end_matches(',').trim();
                if text.is_empty() {
                    return false;
                }
                OptionItem::new(text, text)
            }
        };

        self.add(candidate, now)
    }

    /// Focus left the widget: uncommitted free text becomes a tag, subject
    /// to the same throttle and dedupe rules.
    pub fn blur(&mut self, now: Instant) -> bool {
        let text = self.input.trim().trim_end_matches(',').trim().to_string();
        if text.is_empty() {
            return false;
        }

        self.add(OptionItem::new(text.as_str(), text.as_str()), now)
    }

    /// Remove a tag by value. No undo.
    pub fn remove(&mut self, value: &str) {
        self.tags.retain(|t| t.value != value);
    }

    fn add(&mut self, tag: OptionItem, now: Instant) -> bool {
        // Throttle: absorb duplicate key events within the window.
        if let Some(last) = self.last_added {
            if now.duration_since(last) < ADD_THROTTLE {
                return false;
            }
        }

        // Duplicate values are rejected silently.
        if self.tags.iter().any(|t| t.value == tag.value) {
            self.input.clear();
            self.suggestions.clear();
            return false;
        }

        self.tags.push(tag);
        self.last_added = Some(now);
        self.input.clear();
        self.suggestions.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> TagInput {
        TagInput::new(vec![
            OptionItem::new("Rust", "rust"),
            OptionItem::new("React", "react"),
        ])
    }

    #[test]
    fn test_commit_takes_top_suggestion() {
        let mut w = widget();
        w.set_input("rea");

        assert!(w.commit(Instant::now()));
        assert_eq!(w.tags().len(), 1);
        assert_eq!(w.tags()[0].value, "react");
        assert_eq!(w.label(), "");
    }

    #[test]
    fn test_commit_creates_free_form_tag() {
        let mut w = widget();
        w.set_input("  my new tag, ");

        assert!(w.commit(Instant::now()));
        assert_eq!(w.tags()[0].label, "my new tag");
        assert_eq!(w.tags()[0].value, "my new tag");
    }

    #[test]
    fn test_duplicate_value_rejected_silently() {
        let mut w = widget();
        let t0 = Instant::now();

        w.set_input("rust");
        assert!(w.commit(t0));

        w.set_input("rust");
        assert!(!w.commit(t0 + ADD_THROTTLE));
        assert_eq!(w.tags().len(), 1);
    }

    #[test]
    fn test_throttle_absorbs_double_commit() {
        let mut w = widget();
        let t0 = Instant::now();

        w.set_input("alpha");
        assert!(w.commit(t0));

        // Second event lands inside the window: dropped even for a new value.
        w.set_input("beta");
        assert!(!w.commit(t0 + Duration::from_millis(100)));
        assert_eq!(w.tags().len(), 1);
    }

    #[test]
    fn test_additions_beyond_window_both_succeed() {
        let mut w = widget();
        let t0 = Instant::now();

        w.set_input("alpha");
        assert!(w.commit(t0));

        w.set_input("beta");
        assert!(w.commit(t0 + ADD_THROTTLE));
        assert_eq!(w.tags().len(), 2);
    }

    #[test]
    fn test_remove_by_value() {
        let mut w = widget();
        let t0 = Instant::now();

        w.set_input("alpha");
        w.commit(t0);
        w.set_input("beta");
        w.commit(t0 + ADD_THROTTLE);

        w.remove("alpha");
        assert_eq!(w.tags().len(), 1);
        assert_eq!(w.tags()[0].value, "beta");
    }

    #[test]
    fn test_blur_commits_free_text() {
        let mut w = widget();
        w.set_input("pending tag");

        assert!(w.blur(Instant::now()));
        assert_eq!(w.tags()[0].value, "pending tag");
        assert_eq!(w.label(), "");
    }

    #[test]
    fn test_blur_with_empty_input_is_a_noop() {
        let mut w = widget();
        assert!(!w.blur(Instant::now()));
        assert!(w.tags().is_empty());
    }

    #[test]
    fn test_empty_commit_is_a_noop() {
        let mut w = widget();
        w.set_input("   ,  ");
        assert!(!w.commit(Instant::now()));
        assert!(w.tags().is_empty());
    }
}
