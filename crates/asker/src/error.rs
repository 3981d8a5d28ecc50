//! Error types for prompting.

use std::io;

/// Errors that can occur while asking a question.
///
/// The variants fall into three groups:
///
/// - configuration mistakes made by the caller, detected before anything is
///   read ([`EmptyList`](Self::EmptyList), [`InvalidDefault`](Self::InvalidDefault),
///   [`InvalidDefaultIndex`](Self::InvalidDefaultIndex),
///   [`ConflictingDefaults`](Self::ConflictingDefaults));
/// - invalid answers typed by the user, which loop mode turns into a re-prompt
///   (see [`is_retryable`](Self::is_retryable));
/// - stream failures ([`EndOfInput`](Self::EndOfInput),
///   [`Interrupted`](Self::Interrupted), [`Io`](Self::Io)), which always end
///   the call.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    /// Select was called with no candidates.
    #[error("No items to select from.")]
    EmptyList,

    /// The configured default is not one of the candidates.
    #[error("Default value '{0}' is not in the list of items.")]
    InvalidDefault(String),

    /// The configured default index does not point into the list.
    #[error("Default index {index} is out of range for {len} items.")]
    InvalidDefaultIndex { index: usize, len: usize },

    /// Both a default value and a default index were given and they disagree.
    #[error("Default value '{value}' does not match the item at default index {index}.")]
    ConflictingDefaults { value: String, index: usize },

    /// Empty answer while an answer is required.
    #[error("Input must not be empty.")]
    Required,

    /// Empty answer to a selection without a default.
    #[error("Input must not be empty. Answer by a number or an item.")]
    EmptySelection,

    /// The validator rejected the answer.
    #[error("Failed to validate input: {0}")]
    Validation(String),

    /// A numeric answer outside `1..=len`.
    #[error("'{input}' is out of range. Choose a number between 1 and {len}.")]
    OutOfRange { input: String, len: usize },

    /// A non-numeric answer that matches no candidate.
    #[error("'{0}' is not one of the items.")]
    NoMatch(String),

    /// The input stream ended before anything was read.
    #[error("Reached end of input.")]
    EndOfInput,

    /// The prompt was interrupted by the user.
    #[error("Interrupted.")]
    Interrupted,

    /// Reading or writing the underlying streams failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AskError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether this error describes a bad answer the user can correct.
    ///
    /// In loop mode these are reported on the output and the question is asked
    /// again. Everything else ends the call.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Required
                | Self::EmptySelection
                | Self::Validation(_)
                | Self::OutOfRange { .. }
                | Self::NoMatch(_)
        )
    }
}
