//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures local to one step of a traversal.
///
/// These never escape a render: an unreadable directory becomes an inline
/// annotation and an unresolvable link is shown without its target.
#[derive(Debug, Error)]
pub enum TraversalError {
    #[error("cannot open directory '{}': {source}", .path.display())]
    DirUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read link '{}': {source}", .path.display())]
    LinkUnresolvable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TraversalError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            TraversalError::DirUnreadable { path, .. } => path,
            TraversalError::LinkUnresolvable { path, .. } => path,
        }
    }
}

/// Errors raised while building options or loading configuration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("emojis must be a valid JSON object: {0}")]
    InvalidIconMap(#[source] serde_json::Error),

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read config file '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
