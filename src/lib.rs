//! ptree - print a directory tree with emoji icons

pub mod config;
pub mod error;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::UserConfig;
pub use error::{Error, Result, TraversalError};
pub use tree::{
    DirEntry, EntryFilter, EntryKind, IconMap, RenderOptions, Summary, TreeRenderer, read_entries,
};
