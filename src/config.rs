//! Converter configuration

use std::path::{Path, PathBuf};

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("error parsing configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("error serializing configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Boundary inserted between two rendered rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowSeparator {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// Line separator of the host platform
    Platform,
}

impl RowSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Platform => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}

impl Default for RowSeparator {
    fn default() -> Self {
        Self::Lf
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub separator: RowSeparator,
}

impl Config {
    /// Default location of the configuration file, in the user configuration directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("berlin-clock");
            path.push("config.toml");
            path
        })
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let full = std::fs::read_to_string(path)?;
        Self::from_toml(&full)
    }

    /// Load the configuration from the default location, falling back to defaults if the
    /// file doesn't exist
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading configuration");
                Self::load_file(&path)
            }
            _ => {
                debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
