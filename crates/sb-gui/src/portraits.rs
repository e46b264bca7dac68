//! Procedural 16x16 pixel art portraits.
//!
//! Each portrait is a 16x16 grid of palette indices baked into a
//! `Texture2D` with nearest-neighbor filtering, so no image assets are
//! needed for the demo. Index 0 is transparent.

use macroquad::prelude::*;

/// Portrait palette lookup. Index 0 is transparent.
fn palette_color(idx: u8) -> Color {
    match idx {
        1 => Color::new(0.10, 0.08, 0.12, 1.0), // outline
        2 => Color::new(0.91, 0.72, 0.55, 1.0), // skin
        3 => Color::new(0.48, 0.28, 0.16, 1.0), // hair
        4 => Color::new(0.22, 0.36, 0.53, 1.0), // cloth
        5 => Color::new(0.62, 0.64, 0.70, 1.0), // metal
        6 => Color::new(0.23, 0.20, 0.35, 1.0), // backdrop
        _ => Color::new(0.0, 0.0, 0.0, 0.0),
    }
}

/// Bake a 16x16 palette-indexed grid into a crisp pixel texture.
fn build_portrait(data: &[u8; 256]) -> Texture2D {
    let mut pixels = [0u8; 16 * 16 * 4];
    for (i, &idx) in data.iter().enumerate() {
        let color = palette_color(idx);
        let p = i * 4;
        pixels[p] = (color.r * 255.0) as u8;
        pixels[p + 1] = (color.g * 255.0) as u8;
        pixels[p + 2] = (color.b * 255.0) as u8;
        pixels[p + 3] = (color.a * 255.0) as u8;
    }
    let texture = Texture2D::from_rgba8(16, 16, &pixels);
    texture.set_filter(FilterMode::Nearest);
    texture
}

/// Traveler: long hair, blue cloak.
#[rustfmt::skip]
const TRAVELER_DATA: [u8; 256] = [
    6,6,6,6,1,1,1,1,1,1,1,1,6,6,6,6,
    6,6,6,1,3,3,3,3,3,3,3,3,1,6,6,6,
    6,6,1,3,3,3,3,3,3,3,3,3,3,1,6,6,
    6,6,1,3,3,2,2,2,2,2,2,3,3,1,6,6,
    6,6,1,3,2,2,2,2,2,2,2,2,3,1,6,6,
    6,6,1,3,2,2,2,2,2,2,2,2,3,1,6,6,
    6,6,1,3,2,1,1,2,2,1,1,2,3,1,6,6,
    6,6,1,3,2,2,2,2,2,2,2,2,3,1,6,6,
    6,6,1,3,2,2,2,1,1,2,2,2,3,1,6,6,
    6,6,1,3,2,2,2,2,2,2,2,2,3,1,6,6,
    6,6,1,3,2,2,1,1,1,1,2,2,3,1,6,6,
    6,6,6,1,3,2,2,2,2,2,2,3,1,6,6,6,
    6,6,6,6,1,1,2,2,2,2,1,1,6,6,6,6,
    6,6,6,1,4,4,1,2,2,1,4,4,1,6,6,6,
    6,6,1,4,4,4,4,1,1,4,4,4,4,1,6,6,
    6,1,4,4,4,4,4,4,4,4,4,4,4,4,1,6,
];

/// Gate guard: steel helmet, broad shoulders.
#[rustfmt::skip]
const GUARD_DATA: [u8; 256] = [
    6,6,6,6,1,1,1,1,1,1,1,1,6,6,6,6,
    6,6,6,1,5,5,5,5,5,5,5,5,1,6,6,6,
    6,6,1,5,5,5,5,5,5,5,5,5,5,1,6,6,
    6,6,1,5,5,5,5,5,5,5,5,5,5,1,6,6,
    6,6,1,5,1,1,1,1,1,1,1,1,5,1,6,6,
    6,6,1,5,2,2,2,2,2,2,2,2,5,1,6,6,
    6,6,1,5,2,1,1,2,2,1,1,2,5,1,6,6,
    6,6,1,5,2,2,2,2,2,2,2,2,5,1,6,6,
    6,6,1,1,2,2,2,1,1,2,2,2,1,1,6,6,
    6,6,6,1,2,2,2,2,2,2,2,2,1,6,6,6,
    6,6,6,1,2,2,1,1,1,1,2,2,1,6,6,6,
    6,6,6,1,2,2,2,2,2,2,2,2,1,6,6,6,
    6,6,6,6,1,1,2,2,2,2,1,1,6,6,6,6,
    6,6,1,5,5,5,1,2,2,1,5,5,5,1,6,6,
    6,1,5,5,5,5,5,1,1,5,5,5,5,5,1,6,
    1,5,5,5,5,5,5,5,5,5,5,5,5,5,5,1,
];

/// Build the traveler portrait texture.
pub fn traveler() -> Texture2D {
    build_portrait(&TRAVELER_DATA)
}

/// Build the gate guard portrait texture.
pub fn guard() -> Texture2D {
    build_portrait(&GUARD_DATA)
}
