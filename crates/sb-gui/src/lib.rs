//! Pixel art dialogue panel demo for Sprechblase.
//!
//! A macroquad front end for the `sb-playback` sequencer: a bottom-screen
//! dialogue panel with a portrait slot and typewriter text, rendered on a
//! scaled virtual canvas in retro pixel art style.

pub mod dialogue_box;
pub mod portraits;
pub mod theme;
