//! User configuration file (`~/.ptree.json`)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::tree::IconMap;

const CONFIG_FILE_NAME: &str = ".ptree.json";

/// Settings read from the user's config file.
///
/// ```json
/// { "emojis": { ".rs": "🦀", ".py": "🐍" } }
/// ```
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub emojis: IconMap,
}

impl UserConfig {
    /// `$HOME/.ptree.json`, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
    }

    /// Load the config at `path`.
    ///
    /// A missing or unreadable file yields the default config; only content
    /// that fails to parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file");
                return Ok(Self::default());
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
                return Ok(Self::default());
            }
        };
        Self::parse(&data).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a file the user named explicitly; here a missing file is an error.
    pub fn load_required(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&data).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from [`default_path`](Self::default_path), or the default config
    /// when there is no home directory.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    fn parse(data: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}
