// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;

use crate::config::{example_config, merge_rules, CheckConfig};
use crate::error::{CheckError, Result, ResultExt};
use crate::rules::TitleValidator;

use super::args::Cli;

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The title is valid.
    Success = 0,
    /// The title was rejected.
    ValidationFailed = 1,
    /// The configuration or invocation is unusable.
    ConfigurationError = 2,
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status as u8)
    }
}

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<ExitStatus> {
    if cli.example_config {
        print!("{}", example_config());
        return Ok(ExitStatus::Success);
    }

    // Configuration problems surface before any title is read
    let file_config = if cli.no_config {
        CheckConfig::default()
    } else if let Some(config_path) = &cli.config {
        CheckConfig::load_from(config_path)?
    } else {
        CheckConfig::load()?
    };

    let rules = merge_rules(file_config.rules, cli.rules());
    tracing::debug!("Effective rules: {:?}", rules);
    let config = rules.to_configuration()?;

    let title = read_title(&cli)?;
    let report = TitleValidator::new(&config).report(&title);
    report.print(cli.format);

    tracing::debug!("{}", report.result.summary());

    if report.result.is_valid() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::ValidationFailed)
    }
}

/// Get the title from the argument, PR_TITLE, or stdin.
fn read_title(cli: &Cli) -> Result<String> {
    match cli.title.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read title from stdin")?;
            Ok(buf)
        }
        Some(title) => Ok(title.to_string()),
        None => Err(CheckError::MissingTitle),
    }
}
