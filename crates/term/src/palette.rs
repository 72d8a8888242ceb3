//! Glyph to color escape mapping.

use std::collections::HashMap;

use crate::types::Face;

/// SGR sequence restoring the default attributes.
pub const COLOR_RESET: &str = "\x1b[0m";

/// Lookup from glyph to its color-start sequence.
///
/// Glyphs without an entry pass through uncolored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    starts: HashMap<char, String>,
}

impl Palette {
    /// One entry per cube face.
    pub fn faces() -> Self {
        let starts = Face::ALL
            .iter()
            .map(|f| (f.glyph(), format!("\x1b[{}m", f.color().sgr_code())))
            .collect();
        Self { starts }
    }

    pub fn color_start(&self, glyph: char) -> Option<&str> {
        self.starts.get(&glyph).map(String::as_str)
    }

    /// Longest start sequence, for sizing output buffers.
    pub fn max_start_len(&self) -> usize {
        self.starts.values().map(String::len).max().unwrap_or(0)
    }

    /// Append `ch`, wrapped in its color pair when it has one.
    #[inline]
    pub fn push_colored(&self, out: &mut String, ch: char) {
        match self.color_start(ch) {
            Some(start) => {
                out.push_str(start);
                out.push(ch);
                out.push_str(COLOR_RESET);
            }
            None => out.push(ch),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::faces()
    }
}
