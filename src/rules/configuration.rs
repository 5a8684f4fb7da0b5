// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The immutable rule set a title is validated against.

use crate::error::ConfigError;
use regex::Regex;
use std::collections::BTreeSet;

/// Rules for one validation run.
///
/// Built once, then shared read-only. Construction is the only place a
/// [`ConfigError`] can come from.
#[derive(Debug, Clone)]
pub struct Configuration {
    allowed_types: BTreeSet<String>,
    allowed_scopes: BTreeSet<String>,
    disallowed_scopes: BTreeSet<String>,
    require_scope: bool,
    require_scope_for_breaking_change: bool,
    subject_pattern: Option<Regex>,
}

impl Configuration {
    /// Create a configuration from the allowed types.
    ///
    /// Blank entries are ignored; an empty remainder is an error.
    pub fn new<I, S>(allowed_types: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed_types = collect_tokens(allowed_types);

        if allowed_types.is_empty() {
            return Err(ConfigError::EmptyTypes);
        }

        Ok(Self {
            allowed_types,
            allowed_scopes: BTreeSet::new(),
            disallowed_scopes: BTreeSet::new(),
            require_scope: false,
            require_scope_for_breaking_change: false,
            subject_pattern: None,
        })
    }

    /// Restrict scopes to the given set. An empty set leaves scopes unrestricted.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.allowed_scopes = collect_tokens(scopes);
        self
    }

    /// Reject these scopes regardless of the allowed set.
    pub fn with_disallowed_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.disallowed_scopes = collect_tokens(scopes);
        self
    }

    /// Require every title to carry a scope.
    pub fn with_require_scope(mut self, require: bool) -> Self {
        self.require_scope = require;
        self
    }

    /// Require a scope whenever the `!` marker is present.
    pub fn with_require_scope_for_breaking_change(mut self, require: bool) -> Self {
        self.require_scope_for_breaking_change = require;
        self
    }

    /// Require the description to match `pattern` in full.
    pub fn with_subject_pattern(mut self, pattern: &str) -> Result<Self, ConfigError> {
        let anchored = format!("^(?:{})$", pattern);
        let regex = Regex::new(&anchored).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        self.subject_pattern = Some(regex);
        Ok(self)
    }

    pub fn allowed_types(&self) -> &BTreeSet<String> {
        &self.allowed_types
    }

    pub fn allowed_scopes(&self) -> &BTreeSet<String> {
        &self.allowed_scopes
    }

    pub fn disallowed_scopes(&self) -> &BTreeSet<String> {
        &self.disallowed_scopes
    }

    pub fn require_scope(&self) -> bool {
        self.require_scope
    }

    pub fn require_scope_for_breaking_change(&self) -> bool {
        self.require_scope_for_breaking_change
    }

    pub fn subject_pattern(&self) -> Option<&Regex> {
        self.subject_pattern.as_ref()
    }
}

fn collect_tokens<I, S>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
