// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! checktitle - Conventional pull request title validator
//!
//! Checks that a pull request title follows `type(scope)!: description`
//! and satisfies a set of configured rules.
//!
//! # Features
//!
//! - **Title Parser**: Splits a title into type, scope, breaking marker and description
//! - **Rule Engine**: Allowed and disallowed types and scopes, breaking-change scope, subject pattern
//! - **Config Files**: Optional checktitle.toml discovered from the working directory
//! - **CI Friendly**: Exit codes 0/1/2 and JSON output
//!
//! # Example
//!
//! ```
//! use checktitle::rules::{validate, Configuration, ValidationResult};
//!
//! let config = Configuration::new(["feat", "fix"])
//!     .unwrap()
//!     .with_scopes(["core"]);
//!
//! assert_eq!(validate("feat(core): add thing", &config), ValidationResult::Valid);
//! assert!(!validate("feat(ui): add thing", &config).is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod rules;
pub mod title;

// Re-exports for convenience
pub use error::{CheckError, ConfigError, Result, Violation};
pub use rules::{validate, Configuration, TitleValidator, ValidationResult};
pub use title::ParsedTitle;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of checktitle.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
