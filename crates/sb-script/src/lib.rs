//! Dialogue script data model for Sprechblase.
//!
//! A [`Script`] is an ordered list of [`Line`]s plus a palette of portrait
//! handles. Scripts are leaf data with no behavior; playback lives in
//! `sb-playback`. The [`ScriptDoc`] authoring format maps scripts to and
//! from JSON, with portrait handles referenced by asset name.

/// Serde-backed authoring document.
pub mod doc;
/// Error types for script loading.
pub mod error;
/// A single dialogue line.
pub mod line;
/// Ordered line collection with a portrait palette.
pub mod script;

pub use doc::ScriptDoc;
pub use error::{ScriptError, ScriptResult};
pub use line::Line;
pub use script::Script;
