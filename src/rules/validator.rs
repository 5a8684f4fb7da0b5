// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use crate::error::Violation;
use crate::title::ParsedTitle;
use console::style;

/// Outcome of validating one title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Violation),
}

impl ValidationResult {
    /// Check if the validation passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The violation, if the title was rejected.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(violation) => Some(violation),
        }
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        match self {
            ValidationResult::Valid => "Valid".to_string(),
            ValidationResult::Invalid(violation) => format!("Invalid ({})", violation.code()),
        }
    }
}

/// A validation result together with what is needed to report it.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// The title as supplied.
    pub title: String,
    /// The parsed title, when the grammar matched.
    pub parsed: Option<ParsedTitle>,
    /// The outcome.
    pub result: ValidationResult,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
}

impl ValidationReport {
    /// Print the report. Text is a single stderr line, only on failure;
    /// the suggestion is carried in JSON output only.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// One-line diagnostic, `None` when the title is valid.
    pub fn format_line(&self) -> Option<String> {
        let violation = self.result.violation()?;

        Some(format!(
            "{} {} {}",
            style("✗").red().bold().for_stderr(),
            style(violation.code()).red().for_stderr(),
            violation
        ))
    }

    fn print_text(&self) {
        if let Some(line) = self.format_line() {
            eprintln!("{}", line);
        }
    }

    /// Machine-readable form of the report.
    pub fn to_json(&self) -> serde_json::Value {
        let violation = self.result.violation();

        serde_json::json!({
            "valid": self.result.is_valid(),
            "title": self.title,
            "code": violation.map(Violation::code),
            "message": violation.map(|v| v.to_string()),
            "offending": violation.and_then(Violation::offending_segment),
            "suggestion": self.suggestion,
            "parsed": self.parsed,
        })
    }

    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
        );
    }
}
