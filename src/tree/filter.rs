//! Visibility filtering for directory listings

use glob::Pattern;

use super::config::RenderOptions;
use super::entry::DirEntry;

/// Decides which entries of a listing get rendered.
///
/// Rules run in a fixed order and all of them apply: hidden entries, then
/// directory-only, then the include glob, then the exclude glob. The globs
/// only ever drop files; directories stay so their matching descendants
/// remain reachable.
#[derive(Debug, Clone, Copy)]
pub struct EntryFilter<'a> {
    show_hidden: bool,
    directory_only: bool,
    include: Option<&'a Pattern>,
    exclude: Option<&'a Pattern>,
}

impl<'a> EntryFilter<'a> {
    pub fn from_options(options: &'a RenderOptions) -> Self {
        Self {
            show_hidden: options.show_hidden,
            directory_only: options.directory_only,
            include: options.include.as_ref(),
            exclude: options.exclude.as_ref(),
        }
    }

    /// Check if a single entry survives every rule.
    pub fn is_visible(&self, entry: &DirEntry) -> bool {
        if !self.show_hidden && entry.is_hidden() {
            return false;
        }
        if entry.is_dir() {
            return true;
        }
        if self.directory_only {
            return false;
        }
        if let Some(include) = self.include {
            if !include.matches(&entry.name) {
                return false;
            }
        }
        if let Some(exclude) = self.exclude {
            if exclude.matches(&entry.name) {
                return false;
            }
        }
        true
    }

    /// Keep the visible entries, preserving their order.
    pub fn filter(&self, entries: Vec<DirEntry>) -> Vec<DirEntry> {
        entries
            .into_iter()
            .filter(|entry| self.is_visible(entry))
            .collect()
    }
}
