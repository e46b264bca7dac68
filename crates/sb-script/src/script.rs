//! Ordered line collection with a portrait palette.

use crate::line::Line;

/// A dialogue script: ordered lines plus the portrait palette they index.
///
/// `P` is the front end's image-handle type. Handles are expected to be
/// cheap to clone (refcounted textures, atlas indices); the palette is
/// loaded once and shared so portrait data is never duplicated per line.
#[derive(Debug, Clone, Default)]
pub struct Script<P> {
    /// The dialogue lines, in playback order.
    pub lines: Vec<Line>,
    /// Portrait palette indexed by [`Line::portrait`].
    pub portraits: Vec<P>,
}

impl<P> Script<P> {
    /// Create an empty script.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            portraits: Vec::new(),
        }
    }

    /// Append a line.
    pub fn with_line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    /// Append a portrait handle to the palette.
    pub fn with_portrait(mut self, portrait: P) -> Self {
        self.portraits.push(portrait);
        self
    }

    /// Number of lines in the script.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the script has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
