//! Directory tree rendering
//!
//! The pieces, leaf first:
//!
//! - `entry`: lists one directory's children with their kind
//! - `filter`: hidden, directory-only and glob visibility rules
//! - `icons`: extension to glyph mapping
//! - `summary`: directory/file tally for a run
//! - `renderer`: the recursive branch-drawing walk tying them together

mod config;
mod entry;
mod filter;
mod icons;
mod renderer;
mod summary;

pub use config::RenderOptions;
pub use entry::{DirEntry, EntryKind, read_entries};
pub use filter::EntryFilter;
pub use icons::{DEFAULT_FILE_ICON, DIRECTORY_ICON, IconMap, extension_of};
pub use renderer::TreeRenderer;
pub use summary::{Summary, pluralize};
