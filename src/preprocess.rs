//! Caller-side text preprocessing.
//!
//! The entropy engine counts exactly what it is given. Case folding and
//! whitespace handling are applied here, before letters are added.

use serde::{Deserialize, Serialize};

/// Whitespace as used by the filter: any char at or below U+0020, which
/// includes line ends and other control characters.
#[inline]
pub fn is_filter_whitespace(c: char) -> bool {
    c <= ' '
}

/// Preprocessing policy applied to text before it reaches the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFilter {
    /// Lowercase the text.
    pub ignore_case: bool,
    /// Drop all whitespace. Takes precedence over `collapse_whitespace`.
    pub ignore_whitespace: bool,
    /// Keep only the first whitespace char of each run.
    pub collapse_whitespace: bool,
}

impl TextFilter {
    /// Returns true if the filter would leave every input unchanged.
    pub fn is_identity(&self) -> bool {
        !self.ignore_case && !self.ignore_whitespace && !self.collapse_whitespace
    }

    /// Applies the filter to `text`.
    ///
    /// When either whitespace option is set the text is trimmed first, then
    /// whitespace runs are dropped entirely (`ignore_whitespace`) or reduced
    /// to their first char (`collapse_whitespace`).
    pub fn apply(&self, text: &str) -> String {
        let folded;
        let text = if self.ignore_case {
            folded = text.to_lowercase();
            folded.as_str()
        } else {
            text
        };

        if !self.ignore_whitespace && !self.collapse_whitespace {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut last_was_space = false;
        for c in text.trim().chars() {
            if is_filter_whitespace(c) {
                if !last_was_space && !self.ignore_whitespace {
                    out.push(c);
                    last_was_space = true;
                }
                continue;
            }
            out.push(c);
            last_was_space = false;
        }
        out
    }
}
