//! Single-select autocomplete input.

use super::{matches, OptionItem};

/// Observable state of the autocomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompleteState {
    /// No suggestions shown.
    Idle,
    /// Filtered list visible.
    Suggesting,
    /// A value is bound.
    Committed,
}

/// Autocomplete over an externally supplied option list.
///
/// Free text is rejected: on blur, input that matches no option label is
/// cleared. Commit binds the first filtered suggestion.
#[derive(Debug, Clone)]
pub struct Autocomplete {
    options: Vec<OptionItem>,
    input: String,
    suggestions: Vec<OptionItem>,
    value: Option<String>,
}

impl Autocomplete {
    pub fn new(options: Vec<OptionItem>) -> Self {
        Self {
            options,
            input: String::new(),
            suggestions: Vec::new(),
            value: None,
        }
    }

    pub fn state(&self) -> AutocompleteState {
        if self.value.is_some() {
            AutocompleteState::Committed
        } else if !self.suggestions.is_empty() {
            AutocompleteState::Suggesting
        } else {
            AutocompleteState::Idle
        }
    }

    /// Handle a keystroke: recompute suggestions from the new input text.
    ///
    /// Empty input clears both the suggestions and the bound value.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();

        if self.input.is_empty() {
            self.suggestions.clear();
            self.value = None;
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

    /// Enter/Tab: commit the first filtered suggestion, if any.
    ///
    /// Best match wins; this is not necessarily an exact match.
    pub fn commit(&mut self) {
        if let Some(first) = self.suggestions.first().cloned() {
            self.bind(first);
        }
    }

    /// A suggestion was clicked. Also cancels the pending blur resolution,
    /// which is why blur handling is debounced by the host UI.
    pub fn click(&mut self, index: usize) {
        if let Some(option) = self.suggestions.get(index).cloned() {
            self.bind(option);
        }
    }

    /// Focus left the widget (after the host's debounce window).
    ///
    /// If nothing is bound but the text exactly matches an option label
    /// (case-insensitive), that option is committed; otherwise the input is
    /// cleared entirely.
    pub fn blur(&mut self) {
        if self.value.is_some() {
            self.suggestions.clear();
            return;
        }

        let exact = self
            .options
            .iter()
            .find(|o| o.label.eq_ignore_ascii_case(&self.input))
            .cloned();

        match exact {
            Some(option) => self.bind(option),
            None => {
                self.input.clear();
                self.suggestions.clear();
            }
        }
    }

    // Imperative accessors used by parent forms.

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Bind a value directly; the label is looked up from the options.
    pub fn set_value(&mut self, value: &str) {
        let option = self.options.iter().find(|o| o.value == value).cloned();
        if let Some(option) = option {
            self.bind(option);
        }
    }

    pub fn label(&self) -> &str {
        &self.input
    }

    pub fn set_label(&mut self, label: &str) {
        self.input = label.to_string();
    }

    fn bind(&mut self, option: OptionItem) {
        self.input = option.label;
        self.value = Some(option.value);
        self.suggestions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Autocomplete {
        Autocomplete::new(vec![
            OptionItem::new("Rust", "rust"),
            OptionItem::new("React", "react"),
            OptionItem::new("Ruby", "ruby"),
        ])
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let mut w = widget();
        w.set_input("ru");

        let labels: Vec<&str> = w.suggestions().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Rust", "Ruby"]);
        assert_eq!(w.state(), AutocompleteState::Suggesting);
    }

    #[test]
    fn test_enter_commits_first_suggestion() {
        let mut w = widget();
        w.set_input("rea");
        w.commit();

        assert_eq!(w.value(), Some("react"));
        assert_eq!(w.label(), "React");
        assert_eq!(w.state(), AutocompleteState::Committed);
    }

    #[test]
    fn test_commit_with_no_suggestions_is_a_noop() {
        let mut w = widget();
        w.set_input("zzz");
        w.commit();

        assert_eq!(w.value(), None);
    }

    #[test]
    fn test_empty_input_clears_value_and_suggestions() {
        let mut w = widget();
        w.set_input("rust");
        w.commit();
        assert!(w.value().is_some());

        w.set_input("");
        assert_eq!(w.value(), None);
        assert!(w.suggestions().is_empty());
        assert_eq!(w.state(), AutocompleteState::Idle);
    }

    #[test]
    fn test_blur_commits_exact_label_match() {
        let mut w = widget();
        w.set_input("rUsT");
        w.blur();

        assert_eq!(w.value(), Some("rust"));
        assert_eq!(w.label(), "Rust");
    }

    #[test]
    fn test_blur_rejects_free_text() {
        let mut w = widget();
        w.set_input("not an option");
        w.blur();

        assert_eq!(w.label(), "");
        assert_eq!(w.value(), None);
        assert_eq!(w.state(), AutocompleteState::Idle);
    }

    #[test]
    fn test_click_commits_that_suggestion() {
        let mut w = widget();
        w.set_input("ru");
        w.click(1);

        assert_eq!(w.value(), Some("ruby"));
    }

    #[test]
    fn test_set_value_binds_label_from_options() {
        let mut w = widget();
        w.set_value("react");

        assert_eq!(w.label(), "React");
        assert_eq!(w.value(), Some("react"));
    }
}
