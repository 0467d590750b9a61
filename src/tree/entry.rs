//! Reading one directory's immediate children

use std::fs;
use std::io;
use std::path::Path;

use crate::error::TraversalError;

/// What a directory child is, classified without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
}

impl EntryKind {
    fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            // Sockets, fifos and devices terminate a branch like regular files.
            EntryKind::File
        }
    }
}

/// One child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Read the target of a symlink entry living in `parent`.
    ///
    /// The target is returned as stored in the link, not canonicalized.
    pub fn link_target(&self, parent: &Path) -> Result<String, TraversalError> {
        let path = parent.join(&self.name);
        fs::read_link(&path)
            .map(|target| target.to_string_lossy().into_owned())
            .map_err(|source| TraversalError::LinkUnresolvable { path, source })
    }
}

/// List the immediate children of `path`, sorted by name.
///
/// Any failure while opening the directory, iterating it or inspecting one
/// of its children is reported as [`TraversalError::DirUnreadable`] for
/// `path`; a listing is either complete or absent.
pub fn read_entries(path: &Path) -> Result<Vec<DirEntry>, TraversalError> {
    let unreadable = |source| TraversalError::DirUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push(classify(path, name, entry.file_type())?);
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Build the entry for child `name` of `dir` from its (unfollowed) file type.
fn classify(
    dir: &Path,
    name: String,
    file_type: io::Result<fs::FileType>,
) -> Result<DirEntry, TraversalError> {
    let file_type = file_type.map_err(|source| TraversalError::DirUnreadable {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(DirEntry {
        name,
        kind: EntryKind::from_file_type(file_type),
    })
}
