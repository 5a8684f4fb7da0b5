// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for checktitle.
//!
//! Two families are kept apart: [`ConfigError`] is raised when the caller
//! hands over an unusable configuration, while [`Violation`] describes a
//! title that does not follow the grammar. A violation is an expected
//! outcome and travels inside a [`ValidationResult`](crate::rules::ValidationResult),
//! never through [`CheckError`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for checktitle operations.
#[derive(Error, Debug)]
pub enum CheckError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // No title on the command line, in PR_TITLE or on stdin
    #[error("No pull request title supplied")]
    MissingTitle,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("At least one allowed type is required")]
    EmptyTypes,

    #[error("Invalid subject pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
}

/// Ways a title can fail validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Title is empty")]
    EmptyTitle,

    #[error("Title is missing the ':' between type and description")]
    MissingSeparator,

    #[error("Title is missing a description after ':'")]
    MissingDescription,

    #[error("Malformed header '{header}', expected type(scope)!")]
    MalformedHeader { header: String },

    #[error("Type '{commit_type}' is not allowed")]
    TypeNotAllowed { commit_type: String },

    #[error("Scope '{scope}' is not allowed")]
    ScopeNotAllowed { scope: String },

    #[error("Scope '{scope}' is disallowed")]
    ScopeDisallowed { scope: String },

    #[error("Breaking changes must name a scope")]
    BreakingChangeRequiresScope,

    #[error("Scope is required but not provided")]
    ScopeRequired,

    #[error("Description '{description}' does not match pattern '{pattern}'")]
    SubjectPatternMismatch { description: String, pattern: String },
}

impl Violation {
    /// Stable code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::EmptyTitle => "empty-title",
            Violation::MissingSeparator => "missing-separator",
            Violation::MissingDescription => "missing-description",
            Violation::MalformedHeader { .. } => "malformed-header",
            Violation::TypeNotAllowed { .. } => "type-not-allowed",
            Violation::ScopeNotAllowed { .. } => "scope-not-allowed",
            Violation::ScopeDisallowed { .. } => "scope-disallowed",
            Violation::BreakingChangeRequiresScope => "breaking-change-requires-scope",
            Violation::ScopeRequired => "scope-required",
            Violation::SubjectPatternMismatch { .. } => "subject-pattern-mismatch",
        }
    }

    /// The part of the title the author has to change, if one can be named.
    pub fn offending_segment(&self) -> Option<&str> {
        match self {
            Violation::MalformedHeader { header } => Some(header),
            Violation::TypeNotAllowed { commit_type } => Some(commit_type),
            Violation::ScopeNotAllowed { scope } | Violation::ScopeDisallowed { scope } => {
                Some(scope)
            }
            Violation::SubjectPatternMismatch { description, .. } => Some(description),
            _ => None,
        }
    }
}

/// Result type alias for checktitle operations.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CheckError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
