//! The dialogue panel: a [`Stage`] implementation rendered with macroquad.

use macroquad::prelude::*;

use sb_playback::Stage;

use crate::theme::{self, CANVAS_H, CANVAS_W, palette};

/// Panel geometry on the virtual canvas.
const PANEL_X: f32 = 8.0;
const PANEL_H: f32 = 72.0;
const PANEL_MARGIN_BOTTOM: f32 = 8.0;
/// Portrait display size (16x16 texture scaled up 3x).
const PORTRAIT_SIZE: f32 = 48.0;

/// Dialogue text font size and line spacing.
const FONT_SIZE: u16 = 16;
const LINE_HEIGHT: f32 = 14.0;
/// Rough advance width of the default font at [`FONT_SIZE`], used for
/// character-budget word wrapping.
const CHAR_W: f32 = 7.5;

/// The visible dialogue panel the sequencer types onto.
///
/// Holds exactly the state the [`Stage`] trait pushes at it: the revealed
/// text so far, the current portrait, the panel opacity, and whether the
/// panel is shown at all. [`DialogueBox::draw`] renders a bordered strip
/// along the bottom of the canvas with the portrait on the left.
#[derive(Debug, Default)]
pub struct DialogueBox {
    text: String,
    portrait: Option<Texture2D>,
    alpha: f32,
    active: bool,
}

impl DialogueBox {
    /// Create an inactive, empty dialogue box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel is currently shown.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Draw the panel, portrait, and revealed text at the current opacity.
    pub fn draw(&self) {
        if !self.active {
            return;
        }

        let panel_w = CANVAS_W - PANEL_X * 2.0;
        let panel_y = CANVAS_H - PANEL_H - PANEL_MARGIN_BOTTOM;
        draw_panel(PANEL_X, panel_y, panel_w, PANEL_H, self.alpha);

        // Portrait slot on the left.
        let slot = 12.0;
        if let Some(portrait) = &self.portrait {
            draw_texture_ex(
                portrait,
                PANEL_X + slot,
                panel_y + (PANEL_H - PORTRAIT_SIZE) / 2.0,
                theme::with_alpha(WHITE, self.alpha),
                DrawTextureParams {
                    dest_size: Some(vec2(PORTRAIT_SIZE, PORTRAIT_SIZE)),
                    ..Default::default()
                },
            );
        }

        // Wrapped dialogue text beside the portrait.
        let text_x = PANEL_X + slot + PORTRAIT_SIZE + slot;
        let text_w = panel_w - (text_x - PANEL_X) - slot;
        let max_chars = (text_w / CHAR_W).max(1.0) as usize;
        for (i, line) in wrap(&self.text, max_chars).iter().enumerate() {
            draw_text(
                line,
                text_x,
                panel_y + 18.0 + i as f32 * LINE_HEIGHT,
                f32::from(FONT_SIZE),
                theme::with_alpha(palette::TEXT, self.alpha),
            );
        }
    }
}

impl Stage<Texture2D> for DialogueBox {
    fn clear_text(&mut self) {
        self.text.clear();
    }

    fn push_char(&mut self, ch: char) {
        self.text.push(ch);
    }

    fn show_portrait(&mut self, portrait: &Texture2D) {
        self.portrait = Some(portrait.clone());
    }

    fn set_panel_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn set_panel_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Draw a double-bordered panel rectangle at the given opacity.
fn draw_panel(x: f32, y: f32, w: f32, h: f32, alpha: f32) {
    let fill = theme::with_alpha(palette::PANEL, alpha * 0.92);
    let border = theme::with_alpha(palette::BORDER, alpha);
    draw_rectangle(x, y, w, h, fill);
    // Outer border
    draw_rectangle(x, y, w, 1.0, border);
    draw_rectangle(x, y + h - 1.0, w, 1.0, border);
    draw_rectangle(x, y, 1.0, h, border);
    draw_rectangle(x + w - 1.0, y, 1.0, h, border);
    // Inner border, one pixel inset and dimmer
    let inner = theme::with_alpha(palette::DIM, alpha);
    draw_rectangle(x + 2.0, y + 2.0, w - 4.0, 1.0, inner);
    draw_rectangle(x + 2.0, y + h - 3.0, w - 4.0, 1.0, inner);
    draw_rectangle(x + 2.0, y + 2.0, 1.0, h - 4.0, inner);
    draw_rectangle(x + w - 3.0, y + 2.0, 1.0, h - 4.0, inner);
}

/// Greedy word wrap onto a character budget per line. Words longer than
/// the budget are split mid-word rather than overflowing the panel.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > max_chars {
            // Hard-split an oversized word across lines.
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split: usize = word.chars().take(max_chars).map(char::len_utf8).sum();
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        let needed = word.chars().count() + if current.is_empty() { 0 } else { 1 };
        if current.chars().count() + needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
