// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Pull request title structure and parsing.

use crate::error::Violation;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// Shape of the header that precedes the first top-level ':'.
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^(?P<type>[\w-]+)(?:\((?P<scope>[^()!]+)\))?(?P<breaking>!)?$").unwrap();
}

/// A title split into `type(scope)!: description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTitle {
    /// Type token (feat, fix, etc.).
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Text between the parentheses, if any.
    pub scope: Option<String>,
    /// Whether the header carries the `!` marker.
    pub breaking: bool,
    /// Trimmed text after the separator.
    pub description: String,
}

impl ParsedTitle {
    /// Parse a title.
    ///
    /// Only grammar failures are reported here; whether the type or scope
    /// is acceptable is decided by the rules.
    pub fn parse(title: &str) -> Result<Self, Violation> {
        let title = title.trim();

        if title.is_empty() {
            return Err(Violation::EmptyTitle);
        }

        let separator = find_separator(title).ok_or(Violation::MissingSeparator)?;
        let header = &title[..separator];
        let description = title[separator + 1..].trim();

        if description.is_empty() {
            return Err(Violation::MissingDescription);
        }

        let malformed = || Violation::MalformedHeader {
            header: header.to_string(),
        };

        let captures = HEADER_REGEX.captures(header).ok_or_else(malformed)?;

        let commit_type = captures
            .name("type")
            .map(|m| m.as_str().to_string())
            .ok_or_else(malformed)?;
        let scope = captures.name("scope").map(|m| m.as_str().trim().to_string());

        // Every comma-separated scope must name something.
        if let Some(ref scope) = scope {
            if scope.split(',').any(|s| s.trim().is_empty()) {
                return Err(malformed());
            }
        }

        Ok(Self {
            commit_type,
            scope,
            breaking: captures.name("breaking").is_some(),
            description: description.to_string(),
        })
    }

    /// Individual scopes, split on commas.
    pub fn scopes(&self) -> Vec<&str> {
        self.scope
            .as_deref()
            .map(|s| s.split(',').map(str::trim).collect())
            .unwrap_or_default()
    }

    /// Get the header (everything before the separator).
    pub fn header(&self) -> String {
        let mut result = String::new();
        result.push_str(&self.commit_type);

        if let Some(ref scope) = self.scope {
            result.push('(');
            result.push_str(scope);
            result.push(')');
        }

        if self.breaking {
            result.push('!');
        }

        result
    }
}

impl std::fmt::Display for ParsedTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.header(), self.description)
    }
}

/// Byte offset of the first ':' that is not inside parentheses.
fn find_separator(title: &str) -> Option<usize> {
    let mut depth = 0usize;

    for (idx, ch) in title.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => return Some(idx),
            _ => {}
        }
    }

    None
}
