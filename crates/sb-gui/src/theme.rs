//! Visual theme: color palette, canvas constants, and virtual canvas scaling.

use macroquad::prelude::*;

/// Virtual canvas width in pixels. The window scales this up.
pub const CANVAS_W: f32 = 480.0;
/// Virtual canvas height in pixels. The window scales this up.
pub const CANVAS_H: f32 = 270.0;

/// Dusk-toned palette for the dialogue demo.
pub mod palette {
    use macroquad::prelude::Color;

    /// Letterbox black.
    pub const BLACK: Color = Color::new(0.04, 0.03, 0.06, 1.0);
    /// Night-sky backdrop behind the scene.
    pub const NIGHT: Color = Color::new(0.13, 0.12, 0.23, 1.0);
    /// Panel fill.
    pub const PANEL: Color = Color::new(0.09, 0.09, 0.16, 1.0);
    /// Panel border.
    pub const BORDER: Color = Color::new(0.78, 0.73, 0.58, 1.0);
    /// Primary dialogue text.
    pub const TEXT: Color = Color::new(0.95, 0.93, 0.86, 1.0);
    /// Hint and secondary text.
    pub const DIM: Color = Color::new(0.45, 0.44, 0.52, 1.0);
    /// Gold accent for highlights.
    pub const GOLD: Color = Color::new(0.96, 0.78, 0.26, 1.0);
}

/// Multiply a color's alpha channel, leaving RGB untouched.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, color.a * alpha)
}

/// Set up a `Camera2D` that maps the virtual canvas to the current window,
/// letterboxed to preserve the aspect ratio.
pub fn setup_virtual_canvas() {
    let scale_x = screen_width() / CANVAS_W;
    let scale_y = screen_height() / CANVAS_H;
    let scale = scale_x.min(scale_y);

    let viewport_w = CANVAS_W * scale;
    let viewport_h = CANVAS_H * scale;
    let offset_x = (screen_width() - viewport_w) / 2.0;
    let offset_y = (screen_height() - viewport_h) / 2.0;

    set_camera(&Camera2D {
        zoom: vec2(2.0 / CANVAS_W, 2.0 / CANVAS_H),
        target: vec2(CANVAS_W / 2.0, CANVAS_H / 2.0),
        viewport: Some((
            offset_x as i32,
            offset_y as i32,
            viewport_w as i32,
            viewport_h as i32,
        )),
        ..Default::default()
    });
}
