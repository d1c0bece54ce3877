//! The fixed fortune list.
//!
//! Fortunes are configuration data: loaded once at startup, validated, and
//! never mutated afterwards. A custom list can be supplied as a JSON file,
//! either a bare array or a table with a `fortunes` key:
//!
//! ```text
//! ["The brine knows.", "Beware the pull-tab."]
//! { "fortunes": ["The brine knows.", "Beware the pull-tab."] }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{OracleError, OracleResult};

/// Built-in fortunes (12 entries).
pub const FORTUNES: &[&str] = &[
    "The next tin you open will contain a perfect, unbroken fish. This is a sign of wholeness.",
    "You are not merely a man; you are the combined wisdom of 27 silver souls, packed spine-to-spine in a single, mighty vessel.",
    "The future is bright, but also slightly metallic. Prepare for a sheen of success.",
    "Do not fear the brine; it is merely seasoning for the soul.",
    "When you feel uncertain, recall the precise texture of a slightly stale saltine cracker. This sensory memory is your true anchor.",
    "A flicker of light may guide you through the darkness. It is a hook and you are a small fish. Do not be fooled.",
    "When the grocery list is blank, destiny is full. Tonight, you are a purist. Tomorrow, you might buy eggs.",
    "A sardine dinner is a prophecy: You have chosen simplicity over chaos. The wisdom of the empty refrigerator is immense.",
    "A shadow passes. It is only the ghost of a larger, hungrier fish. Worry not, you are safe.",
    "Consult the back label of the soul. Your true destiny is found in the smallest details.",
    "A small, persistent piece of lint will attach itself to the back of your sweater until you enter a grocery store. This is the only sign you need today.",
    "A great, rich depth of flavor awaits you just beyond the expiration date.",
];

#[derive(Deserialize)]
#[serde(untagged)]
enum FortuneFile {
    List(Vec<String>),
    Table { fortunes: Vec<String> },
}

/// A validated, non-empty, immutable list of fortune texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneList {
    fortunes: Vec<String>,
}

impl Default for FortuneList {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FortuneList {
    /// Build a fortune list, rejecting empty lists and blank entries.
    pub fn new<I, S>(fortunes: I) -> OracleResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fortunes: Vec<String> = fortunes.into_iter().map(Into::into).collect();
        if fortunes.is_empty() {
            return Err(OracleError::EmptyFortuneList);
        }
        if let Some(index) = fortunes.iter().position(|f| f.trim().is_empty()) {
            return Err(OracleError::BlankFortune(index));
        }
        Ok(Self { fortunes })
    }

    /// The built-in sardine fortunes.
    pub fn builtin() -> Self {
        Self {
            fortunes: FORTUNES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Parse a fortune list from JSON text.
    pub fn from_json(source: &str) -> OracleResult<Self> {
        let fortunes = match serde_json::from_str(source)? {
            FortuneFile::List(list) => list,
            FortuneFile::Table { fortunes } => fortunes,
        };
        Self::new(fortunes)
    }

    /// Load a fortune list from a JSON file.
    pub fn from_path(path: &Path) -> OracleResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| OracleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// Number of fortunes.
    pub fn len(&self) -> usize {
        self.fortunes.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.fortunes.is_empty()
    }

    /// Fortune text by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fortunes.get(index).map(String::as_str)
    }

    /// Fortune text by index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn text(&self, index: usize) -> &str {
        &self.fortunes[index]
    }

    /// Iterate over the fortune texts in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fortunes.iter().map(String::as_str)
    }
}
