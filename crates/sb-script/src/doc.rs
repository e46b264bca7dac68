//! Serde-backed authoring document.
//!
//! A [`ScriptDoc`] is the on-disk form of a script: lines reference
//! portraits by asset name, and the front end resolves those names to
//! its own handle type when turning the document into a [`Script`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ScriptError, ScriptResult};
use crate::line::Line;
use crate::script::Script;

/// On-disk script document with portrait asset names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScriptDoc {
    /// Portrait asset names, in palette order.
    pub portraits: Vec<String>,
    /// The dialogue lines, in playback order.
    pub lines: Vec<Line>,
}

impl ScriptDoc {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> ScriptResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from a file.
    pub fn from_path(path: &Path) -> ScriptResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the document to pretty-printed JSON.
    pub fn to_json(&self) -> ScriptResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve portrait names into handles, producing a playable script.
    ///
    /// The loader maps an asset name to a handle; returning `None` fails
    /// resolution with [`ScriptError::PortraitNotFound`]. Lines are moved
    /// into the script unchanged.
    pub fn into_script<P>(
        self,
        mut loader: impl FnMut(&str) -> Option<P>,
    ) -> ScriptResult<Script<P>> {
        let mut portraits = Vec::with_capacity(self.portraits.len());
        for name in &self.portraits {
            let handle = loader(name).ok_or_else(|| ScriptError::PortraitNotFound(name.clone()))?;
            portraits.push(handle);
        }
        Ok(Script {
            lines: self.lines,
            portraits,
        })
    }
}
