use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Settings for building a HAR document. Every field has a default, so an
/// empty file is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarConfig {
    pub creator: CreatorConfig,
    pub page: PageConfig,
    pub entries: EntriesConfig,
}

/// Written to `log.creator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatorConfig {
    pub name: String,
    pub version: String,
}

impl Default for CreatorConfig {
    fn default() -> Self {
        Self {
            name: "chromehar".to_string(),
            version: "0.1".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            id: "page_1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntriesConfig {
    pub on_error: EntryErrorPolicy,
}

/// What to do when a completed request cannot be projected into an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryErrorPolicy {
    /// Fail the whole build.
    #[default]
    Abort,
    /// Drop the entry and log a warning.
    Skip,
}

impl HarConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))
    }
}
