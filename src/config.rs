//! Configuration loading and merging.
//!
//! Configuration only controls the audit log. The read rule itself is fixed.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Env var overriding the user config location.
pub const CONFIG_ENV: &str = "OPENAPI_READ_GUARD_CONFIG";

const USER_CONFIG: &str = ".claude/openapi-read-guard.toml";
const PROJECT_CONFIG: &str = ".openapi-read-guard.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Audit logging settings.
    pub audit: AuditConfig,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable audit logging.
    pub enabled: bool,
    /// Path to audit log file.
    pub path: Option<String>,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::user_config_path()
            .map(|path| Self::load_file(&path))
            .transpose()?
            .flatten()
            .unwrap_or_default();

        if let Some(cwd) = cwd
            && let Some(project) = Self::load_file(&cwd.join(PROJECT_CONFIG))?
        {
            config.merge(project);
        }

        Ok(config)
    }

    /// Parse a config file, `None` if it does not exist.
    fn load_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(toml::from_str(&content)?))
    }

    /// Respects `OPENAPI_READ_GUARD_CONFIG` for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|h| h.join(USER_CONFIG))
    }

    /// Merge a project config over this one.
    fn merge(&mut self, other: Config) {
        if other.audit.enabled {
            self.audit.enabled = true;
            if other.audit.path.is_some() {
                self.audit.path = other.audit.path;
            }
        }
    }

    /// Audit log path, if auditing is on and a path is set.
    pub fn audit_path(&self) -> Option<&Path> {
        if !self.audit.enabled {
            return None;
        }
        self.audit.path.as_deref().map(Path::new)
    }
}
