//! Extension to glyph mapping

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Glyph shown for every directory, including the root.
pub const DIRECTORY_ICON: &str = "📁";

/// Glyph shown for files whose extension has no mapping.
pub const DEFAULT_FILE_ICON: &str = "📄";

/// Mapping from an extension (with its leading dot, e.g. `.rs`) to a glyph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct IconMap(HashMap<String, String>);

impl IconMap {
    /// Parse a JSON object such as `{".rs": "🦀"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::InvalidIconMap)
    }

    /// Overlay `other` on top of this map; keys in `other` win.
    pub fn merge(&mut self, other: IconMap) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Glyph for an exact, case-sensitive extension match.
    pub fn resolve(&self, extension: &str) -> &str {
        if extension.is_empty() {
            return DEFAULT_FILE_ICON;
        }
        self.0
            .get(extension)
            .map(String::as_str)
            .unwrap_or(DEFAULT_FILE_ICON)
    }

    /// Glyph for a file named `name`.
    pub fn icon_for(&self, name: &str) -> &str {
        self.resolve(extension_of(name))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for IconMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The last `.`-suffix of a file name, dot included.
///
/// A leading dot alone does not start an extension, so `.bashrc` has none,
/// while `archive.tar.gz` yields `.gz` and `notes.` yields `.`.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 && !name[..idx].chars().all(|c| c == '.') => &name[idx..],
        _ => "",
    }
}
