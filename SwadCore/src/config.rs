//! Configuration file
//!
//! Read from `config.toml` in the platform config directory
//! (`~/.config/swad/config.toml` on Linux). Every field has a default, so a
//! missing file or a partial one is fine.
//!
//! ```toml
//! [import]
//! max_upload_bytes = 4194304
//! accepted_mime_types = ["text/xml", "application/xml"]
//!
//! [bank]
//! path = "~/swad/questions.json"
//!
//! [export]
//! dir = "~/swad/export"
//! author = "Ana"
//!
//! [log]
//! level = "debug"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::question::{ACCEPTED_MIME_TYPES, ImportLimits, MAX_OPTIONS_PER_QUESTION, MAX_TAGS_PER_QUESTION};

const APP_DIR: &str = "swad";
const CONFIG_FILE: &str = "config.toml";
const BANK_FILE: &str = "questions.json";

// Default value functions for serde
fn default_max_upload_bytes() -> usize {
    4 * 1024 * 1024
}
fn default_accepted_mime_types() -> Vec<String> {
    ACCEPTED_MIME_TYPES.iter().map(ToString::to_string).collect()
}
fn default_max_tags() -> usize {
    MAX_TAGS_PER_QUESTION
}
fn default_max_options() -> usize {
    MAX_OPTIONS_PER_QUESTION
}
fn default_log_level() -> String {
    "warn".to_string()
}

/// `[import]`: limits applied to uploaded question files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    #[serde(default = "default_accepted_mime_types")]
    pub accepted_mime_types: Vec<String>,
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,
    #[serde(default = "default_max_options")]
    pub max_options: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
            accepted_mime_types: default_accepted_mime_types(),
            max_tags: default_max_tags(),
            max_options: default_max_options(),
        }
    }
}

impl ImportConfig {
    #[must_use]
    pub fn limits(&self) -> ImportLimits {
        ImportLimits {
            max_tags: self.max_tags,
            max_options: self.max_options,
        }
    }
}

/// `[bank]`: where imported questions are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankConfig {
    /// Bank file; `~` and environment variables are expanded. Defaults to
    /// `questions.json` in the platform data directory.
    #[serde(default)]
    pub path: Option<String>,
}

impl BankConfig {
    pub fn resolved_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => expand_path(path),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR).join(BANK_FILE))
                .ok_or(Error::NoConfigDir),
        }
    }
}

/// `[export]`: where `LstTstQst` writes question files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Defaults to a `swad-export` directory under the system temp dir.
    #[serde(default)]
    pub dir: Option<String>,
    /// Written in the file credits when set.
    #[serde(default)]
    pub author: Option<String>,
}

impl ExportConfig {
    pub fn resolved_dir(&self) -> Result<PathBuf> {
        match &self.dir {
            Some(dir) => expand_path(dir),
            None => Ok(std::env::temp_dir().join("swad-export")),
        }
    }
}

/// `[log]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter level: `error`, `warn`, `info`, `debug` or `trace`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub import: ImportConfig,
    #[serde(default)]
    pub bank: BankConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Default config file location.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or(Error::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load_default() -> Result<Self> {
        Self::load(Self::default_path()?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write to `path`, creating parent directories.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Expand `~` and `$VARS` in a configured path.
pub fn expand_path(path: &str) -> Result<PathBuf> {
    shellexpand::full(path)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| Error::PathExpansion {
            path: path.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.import.max_tags, 5);
        assert_eq!(config.import.max_options, 10);
        assert_eq!(config.import.accepted_mime_types.len(), 5);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse("[import]\nmax_upload_bytes = 10\n\n[log]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.import.max_upload_bytes, 10);
        assert_eq!(config.import.max_tags, 5);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.bank, BankConfig::default());
    }

    #[test]
    fn test_invalid_file() {
        let err = Config::parse("[import]\nmax_tags = \"many\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("swad").join("config.toml");

        let mut config = Config::default();
        config.bank.path = Some("/srv/swad/questions.json".to_string());
        config.export.author = Some("Ana".to_string());
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
        assert_eq!(
            config.bank.resolved_path().unwrap(),
            PathBuf::from("/srv/swad/questions.json")
        );
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::load(dir.path().join("none.toml")).unwrap(), Config::default());
    }

    #[test]
    fn test_tilde_expansion() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_path("~/bank.json").unwrap(), home.join("bank.json"));
    }
}
