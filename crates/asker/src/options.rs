//! Per-question configuration.

use std::fmt;
use std::sync::Arc;

/// Validator function type.
///
/// Returns `Err(reason)` to reject an answer. The reason is shown to the user
/// in loop mode and carried by [`AskError::Validation`](crate::AskError::Validation)
/// otherwise.
pub type Validator = Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// Options controlling how a question is asked and how answers are accepted.
///
/// Built with consuming setters:
///
/// ```
/// use asker::Options;
///
/// let opts = Options::new()
///     .default("alan")
///     .required(true)
///     .looping(true);
/// assert_eq!(opts.default.as_deref(), Some("alan"));
/// ```
#[derive(Clone, Default)]
pub struct Options {
    /// Answer used when the user enters an empty line.
    pub default: Option<String>,
    /// Zero-based default item for [`Ui::select`](crate::Ui::select).
    pub default_selected: Option<usize>,
    /// Reject empty answers when there is no default.
    pub required: bool,
    /// Ask again after an invalid answer instead of returning an error.
    pub looping: bool,
    /// Suppress echo while the answer is typed.
    pub mask: bool,
    /// Custom acceptance rule for non-empty answers.
    pub validator: Option<Validator>,
    /// Do not print `1: ` style prefixes in front of select items.
    pub hide_order: bool,
    /// Do not mention the default in the prompt line.
    pub hide_default: bool,
    /// Mention the default in the prompt line, but as `*` characters.
    pub mask_default: bool,
}

impl Options {
    /// Create options with everything off.
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Set the default answer.
    ///
    /// An empty string is the same as no default.
    pub fn default(mut self, default: impl Into<String>) -> Self {
        let default = default.into();
        self.default = if default.is_empty() {
            None
        } else {
            Some(default)
        };
        self
    }

    /// Set the default item of a selection by zero-based index.
    pub fn default_selected(mut self, index: usize) -> Self {
        self.default_selected = Some(index);
        self
    }

    /// Reject an empty answer when no default is set.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Re-prompt on invalid input. There is no retry limit.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Read the answer with echo switched off.
    pub fn mask(mut self, mask: bool) -> Self {
        self.mask = mask;
        self
    }

    /// Add a validator for non-empty answers.
    ///
    /// Defaults are accepted as-is and never passed to the validator.
    pub fn validator<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(f));
        self
    }

    /// List select items without their `1: ` numbers.
    pub fn hide_order(mut self, hide: bool) -> Self {
        self.hide_order = hide;
        self
    }

    /// Leave the default out of the prompt line and the item list.
    pub fn hide_default(mut self, hide: bool) -> Self {
        self.hide_default = hide;
        self
    }

    /// Show the default as `*` characters instead of its text.
    pub fn mask_default(mut self, mask: bool) -> Self {
        self.mask_default = mask;
        self
    }

    /// How the default should appear in the prompt line, if at all.
    pub(crate) fn default_hint(&self, shown: &str) -> Option<String> {
        if self.hide_default {
            return None;
        }
        if self.mask_default {
            return Some("*".repeat(shown.chars().count()));
        }
        Some(shown.to_string())
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("default", &self.default)
            .field("default_selected", &self.default_selected)
            .field("required", &self.required)
            .field("looping", &self.looping)
            .field("mask", &self.mask)
            .field("validator", &self.validator.as_ref().map(|_| "<fn>"))
            .field("hide_order", &self.hide_order)
            .field("hide_default", &self.hide_default)
            .field("mask_default", &self.mask_default)
            .finish()
    }
}
