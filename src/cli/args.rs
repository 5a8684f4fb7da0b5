// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::RulesConfig;

/// checktitle - Conventional pull request title validator
///
/// Exits 0 when the title is valid, 1 when it is not, and 2 when the
/// configuration is unusable.
#[derive(Parser, Debug)]
#[command(name = "checktitle")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Validate a pull request title against conventional commit rules", long_about = None)]
pub struct Cli {
    /// Title to validate; "-" reads it from stdin
    #[arg(env = "PR_TITLE")]
    pub title: Option<String>,

    /// Allowed types, comma separated
    #[arg(short, long, value_delimiter = ',')]
    pub types: Option<Vec<String>>,

    /// Allowed scopes, comma separated (default: any scope)
    #[arg(short, long, value_delimiter = ',')]
    pub scopes: Option<Vec<String>>,

    /// Scopes that are always rejected, comma separated
    #[arg(long, value_delimiter = ',')]
    pub disallow_scopes: Option<Vec<String>>,

    /// Require a scope on every title
    #[arg(long)]
    pub require_scope: bool,

    /// Require a scope when the title is marked as a breaking change
    #[arg(long)]
    pub require_scope_for_breaking: bool,

    /// Regular expression the whole description must match
    #[arg(long)]
    pub subject_pattern: Option<String>,

    /// Path to configuration file
    #[arg(short, long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Do not look for a configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    pub example_config: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

impl Cli {
    /// Rule settings given on the command line.
    pub fn rules(&self) -> RulesConfig {
        RulesConfig {
            types: self.types.clone(),
            scopes: self.scopes.clone().unwrap_or_default(),
            disallowed_scopes: self.disallow_scopes.clone().unwrap_or_default(),
            require_scope: self.require_scope,
            require_scope_for_breaking_change: self.require_scope_for_breaking,
            subject_pattern: self.subject_pattern.clone(),
        }
    }
}
