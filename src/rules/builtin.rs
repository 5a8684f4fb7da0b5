// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use crate::error::Violation;
use crate::title::ParsedTitle;

use super::configuration::Configuration;

/// A single rule over a parsed title.
type Check = fn(&ParsedTitle, &Configuration) -> Option<Violation>;

/// Rules in evaluation order. The first one to fail decides the result.
const CHECKS: &[Check] = &[
    check_allowed_types,
    check_allowed_scopes,
    check_disallowed_scopes,
    check_breaking_scope,
    check_require_scope,
    check_subject_pattern,
];

/// Apply the built-in rules, stopping at the first violation.
pub fn apply_builtin_rules(title: &ParsedTitle, config: &Configuration) -> Option<Violation> {
    CHECKS.iter().find_map(|check| check(title, config))
}

/// Check if the type is allowed.
fn check_allowed_types(title: &ParsedTitle, config: &Configuration) -> Option<Violation> {
    if config.allowed_types().contains(&title.commit_type) {
        None
    } else {
        Some(Violation::TypeNotAllowed {
            commit_type: title.commit_type.clone(),
        })
    }
}

/// Check if every scope is in the allowed list.
fn check_allowed_scopes(title: &ParsedTitle, config: &Configuration) -> Option<Violation> {
    let allowed = config.allowed_scopes();
    if allowed.is_empty() {
        return None;
    }

    title
        .scopes()
        .into_iter()
        .find(|scope| !allowed.contains(*scope))
        .map(|scope| Violation::ScopeNotAllowed {
            scope: scope.to_string(),
        })
}

/// Check that no scope is on the disallowed list.
fn check_disallowed_scopes(title: &ParsedTitle, config: &Configuration) -> Option<Violation> {
    let disallowed = config.disallowed_scopes();

    title
        .scopes()
        .into_iter()
        .find(|scope| disallowed.contains(*scope))
        .map(|scope| Violation::ScopeDisallowed {
            scope: scope.to_string(),
        })
}

/// Check that a breaking change names a scope when configured to.
fn check_breaking_scope(title: &ParsedTitle, config: &Configuration) -> Option<Violation> {
    if title.breaking && config.require_scope_for_breaking_change() && title.scope.is_none() {
        Some(Violation::BreakingChangeRequiresScope)
    } else {
        None
    }
}

/// Check if scope is required.
fn check_require_scope(title: &ParsedTitle, config: &Configuration) -> Option<Violation> {
    if config.require_scope() && title.scope.is_none() {
        Some(Violation::ScopeRequired)
    } else {
        None
    }
}

/// Check the description against the subject pattern.
fn check_subject_pattern(title: &ParsedTitle, config: &Configuration) -> Option<Violation> {
    let pattern = config.subject_pattern()?;

    if pattern.is_match(&title.description) {
        None
    } else {
        Some(Violation::SubjectPatternMismatch {
            description: title.description.clone(),
            pattern: pattern.as_str().to_string(),
        })
    }
}

/// Suggest a fix for a violation, using the configuration where it helps.
pub fn suggestion(violation: &Violation, config: &Configuration) -> Option<String> {
    let join = |set: &std::collections::BTreeSet<String>| {
        set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    };

    match violation {
        Violation::EmptyTitle | Violation::MissingSeparator | Violation::MalformedHeader { .. } => {
            Some("Use the form: type(scope)!: description".to_string())
        }
        Violation::MissingDescription => Some("Describe the change after the ':'".to_string()),
        Violation::TypeNotAllowed { .. } => {
            Some(format!("Use one of: {}", join(config.allowed_types())))
        }
        Violation::ScopeNotAllowed { .. } => {
            Some(format!("Use one of: {}", join(config.allowed_scopes())))
        }
        Violation::ScopeDisallowed { .. } => Some("Use a different scope".to_string()),
        Violation::BreakingChangeRequiresScope | Violation::ScopeRequired => {
            Some("Add a scope in parentheses: type(scope): description".to_string())
        }
        Violation::SubjectPatternMismatch { .. } => None,
    }
}
