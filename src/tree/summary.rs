//! Directory and file tally for a single run

use super::entry::EntryKind;

/// Counts of rendered entries, excluding the root.
///
/// A renderer accumulates into the summary it is handed; recursive calls share
/// it, so callers wanting an independent tally start from a fresh or
/// [`reset`](Summary::reset) value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub directories: usize,
    pub files: usize,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one printed entry. Symlinks are terminal, so they count as files.
    pub fn record(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::Directory => self.directories += 1,
            EntryKind::File | EntryKind::Symlink => self.files += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn total(&self) -> usize {
        self.directories + self.files
    }

    /// Tally line such as `1 directory, 3 files`, without a trailing newline.
    pub fn format_tally(&self, directory_only: bool) -> String {
        let dirs = format!(
            "{} {}",
            self.directories,
            pluralize(self.directories, "directory", "directories")
        );
        if directory_only {
            dirs
        } else {
            format!(
                "{}, {} {}",
                dirs,
                self.files,
                pluralize(self.files, "file", "files")
            )
        }
    }
}

/// Singular for exactly one, plural otherwise (zero included).
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
