//! Configuration loading for git-safety-guard
//!
//! The rule tables are compiled in. The config file only controls ambient
//! behaviour such as the audit log, and is optional.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable audit logging
    pub audit_log: bool,

    /// Path to audit log file
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            audit_log: false,
            audit_path: Some("~/.claude/git-safety-guard/audit.jsonl".to_string()),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
}

impl Config {
    /// Load configuration from the standard locations or use defaults
    pub fn load() -> Self {
        let config_paths = [
            // User-specific config
            dirs::home_dir().map(|p| p.join(".claude/git-safety-guard/config.toml")),
            // System-wide config
            Some(PathBuf::from("/etc/git-safety-guard/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                match Self::load_from(&path) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to load {}: {}", path.display(), e);
                    }
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Get the audit log path (expanded), if audit logging is on
    pub fn audit_path(&self) -> Option<PathBuf> {
        if !self.general.audit_log {
            return None;
        }
        self.general.audit_path.as_deref().map(Self::expand_path)
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
audit_log = false
audit_path = "~/.claude/git-safety-guard/audit.jsonl"
"#;
