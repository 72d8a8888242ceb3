//! Frame to terminal text.
//!
//! Output layout:
//!
//! ```text
//! CURSOR_HOME row0 LINE_BREAK row1 LINE_BREAK ... row(h-1) LINE_BREAK
//! ```
//!
//! with every face glyph wrapped as `start glyph COLOR_RESET`. Buffers are
//! cleared and rebuilt every frame, so output never accumulates.

use crate::core::FrameBuffer;
use crate::palette::{Palette, COLOR_RESET};

/// Moves the cursor to the top-left cell so each frame overwrites the last.
pub const CURSOR_HOME: &str = "\x1b[H";

/// Row separator. CRLF keeps rows aligned in raw mode as well.
pub const LINE_BREAK: &str = "\r\n";

#[derive(Debug, Clone, Default)]
pub struct Compositor {
    palette: Palette,
    plain: String,
}

impl Compositor {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            plain: String::new(),
        }
    }

    /// Uncolored frame text: home prefix, then each row followed by a line break.
    pub fn serialize_into(fb: &FrameBuffer, out: &mut String) {
        out.push_str(CURSOR_HOME);
        for row in fb.glyphs().rows() {
            out.extend(row.iter());
            out.push_str(LINE_BREAK);
        }
    }

    /// Wrap face glyphs in `text` with their color pair; copy everything else.
    pub fn colorize_into(&self, text: &str, out: &mut String) {
        for ch in text.chars() {
            self.palette.push_colored(out, ch);
        }
    }

    /// Serialize and colorize `fb` into `out`, replacing its contents.
    pub fn compose_into(&mut self, fb: &FrameBuffer, out: &mut String) {
        let (plain_cap, colored_cap) = self.capacity_for(fb);

        self.plain.clear();
        self.plain.reserve(plain_cap);
        Self::serialize_into(fb, &mut self.plain);

        out.clear();
        out.reserve(colored_cap);
        self.colorize_into(&self.plain, out);
    }

    pub fn compose(&mut self, fb: &FrameBuffer) -> String {
        let mut out = String::new();
        self.compose_into(fb, &mut out);
        out
    }

    /// Worst-case byte sizes of the plain and colored text for `fb`.
    fn capacity_for(&self, fb: &FrameBuffer) -> (usize, usize) {
        let w = fb.width() as usize;
        let h = fb.height() as usize;
        let max_glyph = fb
            .glyphs()
            .cells()
            .iter()
            .map(|c| c.len_utf8())
            .max()
            .unwrap_or(1);
        let wrapped = self.palette.max_start_len() + max_glyph + COLOR_RESET.len();
        let plain = CURSOR_HOME.len() + h * (w * max_glyph + LINE_BREAK.len());
        let colored = CURSOR_HOME.len() + h * (w * wrapped + LINE_BREAK.len());
        (plain, colored)
    }
}
