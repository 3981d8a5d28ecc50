//! Choosing one item from a list.

use std::fmt::Write as _;
use std::num::IntErrorKind;

use crate::line::trim_terminator;
use crate::{AskError, Options};

/// A validated list of candidates together with its default.
///
/// Construction checks the caller's configuration, so it fails before any
/// question is shown. Resolving lines afterwards never mutates the selection.
///
/// # Example
///
/// ```
/// use asker::{Options, Selection};
///
/// let sel = Selection::new(&["go", "Go", "golang"], &Options::new().default("Go")).unwrap();
/// assert_eq!(sel.resolve("").unwrap(), ("Go".to_string(), 1));
/// assert_eq!(sel.resolve("3").unwrap(), ("golang".to_string(), 2));
/// assert_eq!(sel.resolve("go").unwrap(), ("go".to_string(), 0));
/// ```
#[derive(Debug, Clone)]
pub struct Selection {
    items: Vec<String>,
    default: Option<usize>,
}

impl Selection {
    /// Validate `items` against the defaults in `opts`.
    ///
    /// # Errors
    ///
    /// - [`AskError::EmptyList`] when there are no items
    /// - [`AskError::InvalidDefault`] when the default value is not an item
    /// - [`AskError::InvalidDefaultIndex`] when the default index is out of range
    /// - [`AskError::ConflictingDefaults`] when both are given and disagree
    pub fn new<S: AsRef<str>>(items: &[S], opts: &Options) -> Result<Self, AskError> {
        let items: Vec<String> = items.iter().map(|s| s.as_ref().to_string()).collect();
        if items.is_empty() {
            return Err(AskError::EmptyList);
        }

        let by_value = match &opts.default {
            Some(value) => Some(
                position(&items, value).ok_or_else(|| AskError::InvalidDefault(value.clone()))?,
            ),
            None => None,
        };

        let by_index = match opts.default_selected {
            Some(index) if index >= items.len() => {
                return Err(AskError::InvalidDefaultIndex {
                    index,
                    len: items.len(),
                })
            }
            other => other,
        };

        let default = match (by_value, by_index) {
            (Some(v), Some(i)) if items[v] != items[i] => {
                return Err(AskError::ConflictingDefaults {
                    value: items[v].clone(),
                    index: i,
                })
            }
            // Same text, possibly a later duplicate: trust the explicit index.
            (Some(_), Some(i)) => Some(i),
            (v, i) => v.or(i),
        };

        Ok(Self { items, default })
    }

    /// The default item and its zero-based index.
    pub fn default_item(&self) -> Option<(&str, usize)> {
        self.default.map(|i| (self.items[i].as_str(), i))
    }

    /// Decide which item a raw line picks.
    ///
    /// Numbers are tried first: `1..=len` selects by position, any other
    /// integer is [`AskError::OutOfRange`]. Only text that is not an integer
    /// is compared against the items, and the first equal item wins. An empty
    /// line picks the default, or is [`AskError::EmptySelection`] without one.
    pub fn resolve(&self, raw: &str) -> Result<(String, usize), AskError> {
        let line = trim_terminator(raw);

        if line.is_empty() {
            return self
                .default_item()
                .map(|(item, i)| (item.to_string(), i))
                .ok_or(AskError::EmptySelection);
        }

        match line.parse::<i64>() {
            Ok(n) if n >= 1 && (n as u64) <= self.items.len() as u64 => {
                let index = (n - 1) as usize;
                Ok((self.items[index].clone(), index))
            }
            Ok(_) => Err(self.out_of_range(line)),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Err(self.out_of_range(line))
            }
            Err(_) => position(&self.items, line)
                .map(|i| (self.items[i].clone(), i))
                .ok_or_else(|| AskError::NoMatch(line.to_string())),
        }
    }

    fn out_of_range(&self, input: &str) -> AskError {
        AskError::OutOfRange {
            input: input.to_string(),
            len: self.items.len(),
        }
    }

    /// The list as shown to the user, one item per line.
    ///
    /// Items are numbered from 1 unless `hide_order` is set; the default item
    /// is marked with `(default)` unless the default is hidden.
    pub fn render(&self, opts: &Options) -> String {
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            if opts.hide_order {
                out.push_str(item);
            } else {
                let _ = write!(out, "{}: {}", i + 1, item);
            }
            if self.default == Some(i) && !opts.hide_default && !opts.mask_default {
                out.push_str(" (default)");
            }
            out.push('\n');
        }
        out
    }

    /// The line asking for the choice, e.g. `Enter a number (Default is 2): `.
    pub fn prompt_line(&self, opts: &Options) -> String {
        let (what, shown) = match (opts.hide_order, self.default_item()) {
            (false, Some((_, i))) => ("a number", Some((i + 1).to_string())),
            (true, Some((item, _))) => ("a value", Some(item.to_string())),
            (false, None) => ("a number", None),
            (true, None) => ("a value", None),
        };
        match shown.and_then(|s| opts.default_hint(&s)) {
            Some(hint) => format!("Enter {} (Default is {}): ", what, hint),
            None => format!("Enter {}: ", what),
        }
    }
}

fn position(items: &[String], value: &str) -> Option<usize> {
    items.iter().position(|item| item == value)
}
