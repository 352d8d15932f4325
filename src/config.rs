//! Configuration file handling.
//!
//! The config lives at `$FOLIO_CONFIG` when set, otherwise at
//! `<config_dir>/folio/config.toml`. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::terminal::{CommandTable, Profile, Prompt, DEFAULT_HOST, DEFAULT_USER};
use crate::theme::Theme;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Errors from loading, validating or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config value for {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub prompt: PromptConfig,
    pub profile: Profile,
    pub ui: UiConfig,
}

/// `[prompt]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptConfig {
    pub user: String,
    pub host: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }
}

/// `[ui]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Theme name: `phosphor`, `classic` or `ocean`
    pub theme: String,
    /// Event poll interval in milliseconds
    pub tick_ms: u64,
    /// Maximum number of input lines kept for Up/Down recall
    pub history_size: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "phosphor".to_string(),
            tick_ms: 250,
            history_size: 100,
        }
    }
}

impl Config {
    /// Resolve the config file path.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("folio").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load and validate the file at `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse TOML text without validating.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Write as pretty TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_prompt_part("prompt.user", &self.prompt.user)?;
        validate_prompt_part("prompt.host", &self.prompt.host)?;

        if Theme::by_name(&self.ui.theme).is_none() {
            return Err(ConfigError::Invalid {
                field: "ui.theme",
                message: format!(
                    "unknown theme '{}' (expected one of: {})",
                    self.ui.theme,
                    Theme::NAMES.join(", ")
                ),
            });
        }
        if self.ui.history_size == 0 {
            return Err(ConfigError::Invalid {
                field: "ui.history_size",
                message: "must be at least 1".to_string(),
            });
        }
        if self.ui.tick_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "ui.tick_ms",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn prompt(&self) -> Prompt {
        Prompt::new(self.prompt.user.clone(), self.prompt.host.clone())
    }

    /// The command table for this config's profile.
    pub fn command_table(&self) -> CommandTable {
        CommandTable::portfolio(&self.profile)
    }

    /// Selected theme; falls back to the default for unknown names.
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.ui.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %self.ui.theme, "unknown theme, using default");
            Theme::default()
        })
    }
}

fn validate_prompt_part(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Invalid {
            field,
            message: "must not be empty".to_string(),
        });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Invalid {
            field,
            message: format!("'{}' must not contain whitespace", value),
        });
    }
    Ok(())
}
