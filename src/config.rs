//! User configuration, persisted as TOML.
//!
//! Looked up in order: an explicit `--config` path, `$GARDINER_CONFIG`, then
//! `$XDG_CONFIG_HOME/gardiner-tools/config.toml` (default `~/.config`).
//! Every field is optional:
//!
//! ```toml
//! demo_words = ["ꜥhꜥ", "ꜣšꜣ"]
//!
//! [labels]
//! append = true
//!
//! [[labels.categories]]
//! name = "A"
//! count = 56
//! ```

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collate::DEMO_WORDS;
use crate::glyph::catalog::{CategoryCount, LabelResult, SignList, WriteMode};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "GARDINER_CONFIG";

/// Errors from loading configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(gardiner::config::read),
        help("Ensure the config file exists and is readable, or drop --config to use defaults.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}: {message}")]
    #[diagnostic(
        code(gardiner::config::parse),
        help("Check the TOML syntax. Known keys: demo_words, labels.append, labels.categories.")
    )]
    Parse { path: String, message: String },

    #[error("failed to write config: {path}")]
    #[diagnostic(
        code(gardiner::config::write),
        help("Ensure the parent directory exists and you have write permissions.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GardinerConfig {
    /// Words collated by `gardiner sort` when none are given.
    #[serde(default = "default_demo_words")]
    pub demo_words: Vec<String>,
    /// Label-list generation.
    #[serde(default)]
    pub labels: LabelConfig,
}

/// The `[labels]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelConfig {
    /// Append to an existing label file instead of replacing it.
    #[serde(default = "default_append")]
    pub append: bool,
    /// Catalog overrides: replace an existing category's count or add a new one.
    #[serde(default)]
    pub categories: Vec<CategoryCount>,
}

fn default_demo_words() -> Vec<String> {
    DEMO_WORDS.iter().map(|w| w.to_string()).collect()
}
fn default_append() -> bool {
    true
}

impl Default for GardinerConfig {
    fn default() -> Self {
        Self {
            demo_words: default_demo_words(),
            labels: LabelConfig::default(),
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            append: default_append(),
            categories: Vec::new(),
        }
    }
}

impl LabelConfig {
    /// The standard catalog with this config's overrides applied.
    pub fn sign_list(&self) -> LabelResult<SignList> {
        SignList::with_overrides(&self.categories)
    }

    pub fn write_mode(&self) -> WriteMode {
        if self.append {
            WriteMode::Append
        } else {
            WriteMode::Truncate
        }
    }
}

impl GardinerConfig {
    /// Parse a TOML document. `origin` names the source in errors.
    pub fn from_toml(content: &str, origin: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&content, &path.display().to_string())
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Resolve and load the effective configuration.
    ///
    /// An explicit path must exist. A missing `$GARDINER_CONFIG` file or a
    /// missing default file falls back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
            if path.exists() {
                return Self::load(&path);
            }
            tracing::warn!(path = %path.display(), "{CONFIG_ENV} points to a missing file, using defaults");
            return Ok(Self::default());
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }
}

/// `$XDG_CONFIG_HOME/gardiner-tools/config.toml`, or `None` without a home directory.
pub fn default_config_path() -> Option<PathBuf> {
    config_path_from(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn config_path_from(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    let base = xdg_config_home
        .filter(|p| p.is_absolute())
        .or_else(|| home.map(|h| h.join(".config")))?;
    Some(base.join("gardiner-tools").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = GardinerConfig::from_toml("", "inline").unwrap();
        assert_eq!(config, GardinerConfig::default());
        assert_eq!(config.demo_words.len(), DEMO_WORDS.len());
        assert!(config.labels.append);
        assert_eq!(config.labels.write_mode(), WriteMode::Append);
    }

    #[test]
    fn parses_overrides() {
        let config = GardinerConfig::from_toml(
            r#"
demo_words = ["ḏd", "ꜥnḫ"]

[labels]
append = false

[[labels.categories]]
name = "A"
count = 56

[[labels.categories]]
name = "NL"
count = 20
"#,
            "inline",
        )
        .unwrap();

        assert_eq!(config.demo_words, vec!["ḏd", "ꜥnḫ"]);
        assert_eq!(config.labels.write_mode(), WriteMode::Truncate);
        let list = config.labels.sign_list().unwrap();
        assert_eq!(list.count_for("A"), Some(56));
        assert_eq!(list.count_for("NL"), Some(20));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = GardinerConfig::from_toml("colour = true", "inline").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path, .. } if path == "inline"));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = GardinerConfig::default();
        config.labels.categories.push(CategoryCount::new("Aa", 32));
        config.save(&path).unwrap();

        assert_eq!(GardinerConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");
        let err = GardinerConfig::resolve(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn config_path_prefers_absolute_xdg() {
        let path = config_path_from(Some("/xdg".into()), Some("/home/u".into())).unwrap();
        assert_eq!(path, PathBuf::from("/xdg/gardiner-tools/config.toml"));

        let path = config_path_from(Some("relative".into()), Some("/home/u".into())).unwrap();
        assert_eq!(path, PathBuf::from("/home/u/.config/gardiner-tools/config.toml"));

        assert!(config_path_from(None, None).is_none());
    }
}
