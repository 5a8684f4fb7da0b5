// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structures that can be loaded from checktitle.toml.

use serde::Deserialize;

use super::default::default_types;
use crate::error::ConfigError;
use crate::rules::Configuration;

/// The main configuration file structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CheckConfig {
    /// Rule configuration.
    pub rules: RulesConfig,
}

impl CheckConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Rule configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RulesConfig {
    /// Allowed types. Unset means the conventional defaults.
    pub types: Option<Vec<String>>,

    /// Allowed scopes (empty means all allowed).
    pub scopes: Vec<String>,

    /// Scopes that are always rejected.
    pub disallowed_scopes: Vec<String>,

    /// Whether every title needs a scope.
    pub require_scope: bool,

    /// Whether a breaking change needs a scope.
    pub require_scope_for_breaking_change: bool,

    /// Pattern the whole description must match.
    pub subject_pattern: Option<String>,
}

impl RulesConfig {
    /// Build the validator configuration from these settings.
    pub fn to_configuration(&self) -> Result<Configuration, ConfigError> {
        let types = self.types.clone().unwrap_or_else(default_types);

        let config = Configuration::new(types)?
            .with_scopes(&self.scopes)
            .with_disallowed_scopes(&self.disallowed_scopes)
            .with_require_scope(self.require_scope)
            .with_require_scope_for_breaking_change(self.require_scope_for_breaking_change);

        match self.subject_pattern.as_deref() {
            Some(pattern) => config.with_subject_pattern(pattern),
            None => Ok(config),
        }
    }
}
