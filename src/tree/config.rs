//! Configuration types for tree rendering

use glob::Pattern;

use crate::error::{Error, Result};

use super::icons::IconMap;

/// Options for one top-level render. Every field has a default.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub icons: IconMap,
    pub directory_only: bool,
    /// Levels to descend, counting the root's children as level 1.
    /// `None` means unbounded; `Some(0)` renders nothing at all.
    pub max_depth: Option<usize>,
    pub show_hidden: bool,
    /// Only files whose name matches are shown. Directories always pass.
    pub include: Option<Pattern>,
    /// Files whose name matches are hidden. Directories always pass.
    pub exclude: Option<Pattern>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_icons(mut self, icons: IconMap) -> Self {
        self.icons = icons;
        self
    }

    pub fn with_directory_only(mut self, directory_only: bool) -> Self {
        self.directory_only = directory_only;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    pub fn with_include(mut self, pattern: &str) -> Result<Self> {
        self.include = Some(compile_pattern(pattern)?);
        Ok(self)
    }

    pub fn with_exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude = Some(compile_pattern(pattern)?);
        Ok(self)
    }
}

/// Compile a shell-style glob (`*`, `?`, `[...]`).
fn compile_pattern(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
