//! A single dialogue line.

use serde::{Deserialize, Serialize};

/// Placeholder text used by default-constructed lines.
pub const PLACEHOLDER_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
     sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

/// One dialogue unit: an index into the script's portrait palette plus the
/// text to type out.
///
/// The portrait index is not validated against the palette length; playback
/// tolerates out-of-range indices by leaving the previous portrait in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Index into the owning script's portrait palette.
    pub portrait: usize,
    /// The dialogue text to display.
    pub text: String,
}

impl Line {
    /// Create a new line with the given portrait index and text.
    pub fn new(portrait: usize, text: impl Into<String>) -> Self {
        Self {
            portrait,
            text: text.into(),
        }
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new(0, PLACEHOLDER_TEXT)
    }
}
