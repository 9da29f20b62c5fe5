//! Config file reading

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for loading a config and generating its declaration stub
#[derive(Debug)]
pub enum ConfigError {
    /// The config file does not exist
    NotFound(PathBuf),
    /// IO error reading the config or writing the declaration file
    Io(io::Error),
    /// TOML parsing error, or a failed conversion into a concrete type
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound(path) => write!(
                f,
                "config file not found at {} (is the CONFIG environment variable set?)",
                path.display()
            ),
            ConfigError::Io(e) => write!(f, "config file I/O failed: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::NotFound(_) => None,
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Read the whole config file at `path` as text.
///
/// Returns [`ConfigError::NotFound`] when nothing exists at `path`; any other
/// failure (permissions on the file or a parent directory, a directory,
/// invalid UTF-8) is [`ConfigError::Io`].
pub fn read_config(path: &Path) -> Result<String, ConfigError> {
    if !path.try_exists()? {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    Ok(content)
}
