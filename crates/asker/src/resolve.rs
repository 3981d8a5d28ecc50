//! Turning a raw answer line into an accepted answer.

use crate::line::trim_terminator;
use crate::{AskError, Options};

/// Decide what a raw line means for a free-text question.
///
/// - An empty line yields the default when one is set, the empty string when
///   the answer is optional, and [`AskError::Required`] otherwise.
/// - A non-empty line is checked against the validator, if any.
///
/// This is a pure function of its inputs; the retry policy lives in
/// [`Ui::ask`](crate::Ui::ask), which re-asks on [retryable](AskError::is_retryable)
/// errors in loop mode.
pub fn resolve_answer(raw: &str, opts: &Options) -> Result<String, AskError> {
    let line = trim_terminator(raw);

    if line.is_empty() {
        if let Some(default) = &opts.default {
            return Ok(default.clone());
        }
        if !opts.required {
            return Ok(String::new());
        }
        return Err(AskError::Required);
    }

    if let Some(validator) = &opts.validator {
        validator(line).map_err(AskError::Validation)?;
    }

    Ok(line.to_string())
}
