// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{CheckError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::{CheckConfig, RulesConfig};

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["checktitle.toml", ".checktitle.toml", ".github/checktitle.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir).or_else(find_user_config_file)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    None
}

/// Check the XDG config directory.
fn find_user_config_file() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("checktitle").join("config.toml");
    path.is_file().then_some(path)
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<CheckConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(CheckConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<CheckConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CheckError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CheckError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<CheckConfig> {
    toml::from_str(content).map_err(|e| {
        CheckError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Merge two rule sets, with the overlay taking precedence.
pub fn merge_rules(base: RulesConfig, overlay: RulesConfig) -> RulesConfig {
    RulesConfig {
        types: overlay.types.or(base.types),
        scopes: if !overlay.scopes.is_empty() {
            overlay.scopes
        } else {
            base.scopes
        },
        disallowed_scopes: if !overlay.disallowed_scopes.is_empty() {
            overlay.disallowed_scopes
        } else {
            base.disallowed_scopes
        },
        require_scope: overlay.require_scope || base.require_scope,
        require_scope_for_breaking_change: overlay.require_scope_for_breaking_change
            || base.require_scope_for_breaking_change,
        subject_pattern: overlay.subject_pattern.or(base.subject_pattern),
    }
}
