// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Title validation entry points.

use crate::title::ParsedTitle;

use super::builtin::{apply_builtin_rules, suggestion};
use super::configuration::Configuration;
use super::validator::{ValidationReport, ValidationResult};

/// Validate a title against a configuration.
pub fn validate(title: &str, config: &Configuration) -> ValidationResult {
    TitleValidator::new(config).validate(title)
}

/// Validator over a borrowed configuration.
#[derive(Debug, Clone, Copy)]
pub struct TitleValidator<'a> {
    config: &'a Configuration,
}

impl<'a> TitleValidator<'a> {
    /// Create a new validator with the given configuration.
    pub fn new(config: &'a Configuration) -> Self {
        Self { config }
    }

    /// Validate a title.
    pub fn validate(&self, title: &str) -> ValidationResult {
        match self.parse_and_check(title) {
            (_, Some(violation)) => ValidationResult::Invalid(violation),
            (_, None) => ValidationResult::Valid,
        }
    }

    /// Validate a title and keep what is needed to report on it.
    pub fn report(&self, title: &str) -> ValidationReport {
        let (parsed, violation) = self.parse_and_check(title);
        let suggestion = violation
            .as_ref()
            .and_then(|v| suggestion(v, self.config));

        ValidationReport {
            title: title.to_string(),
            parsed,
            result: violation.map_or(ValidationResult::Valid, ValidationResult::Invalid),
            suggestion,
        }
    }

    fn parse_and_check(
        &self,
        title: &str,
    ) -> (Option<ParsedTitle>, Option<crate::error::Violation>) {
        let parsed = match ParsedTitle::parse(title) {
            Ok(parsed) => parsed,
            Err(violation) => {
                tracing::debug!(code = violation.code(), "Title did not parse");
                return (None, Some(violation));
            }
        };

        tracing::debug!(title = %parsed, "Parsed title");
        let violation = apply_builtin_rules(&parsed, self.config);
        (Some(parsed), violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Violation;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn types(list: &[&str]) -> Configuration {
        Configuration::new(list.iter().copied()).unwrap()
    }

    #[test]
    fn test_plain_title_valid() {
        assert_eq!(
            validate("feat: add thing", &types(&["feat", "fix"])),
            ValidationResult::Valid
        );
    }

    #[test]
    fn test_listed_scope_valid() {
        let config = types(&["feat"]).with_scopes(["core"]);
        assert_eq!(
            validate("feat(core): add thing", &config),
            ValidationResult::Valid
        );
    }

    #[test]
    fn test_unlisted_scope_invalid() {
        let config = types(&["feat"]).with_scopes(["core"]);
        assert_eq!(
            validate("feat(ui): add thing", &config),
            ValidationResult::Invalid(Violation::ScopeNotAllowed {
                scope: "ui".to_string()
            })
        );
    }

    #[test]
    fn test_breaking_requires_scope() {
        let config = types(&["feat"]).with_require_scope_for_breaking_change(true);
        assert_eq!(
            validate("feat!: drop api", &config),
            ValidationResult::Invalid(Violation::BreakingChangeRequiresScope)
        );
        assert_eq!(
            validate("feat(api)!: drop api", &config),
            ValidationResult::Valid
        );
    }

    #[test]
    fn test_breaking_allowed_without_flag() {
        assert_eq!(
            validate("feat!: drop api", &types(&["feat"])),
            ValidationResult::Valid
        );
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(
            validate("bogus: add thing", &types(&["feat", "fix"])),
            ValidationResult::Invalid(Violation::TypeNotAllowed {
                commit_type: "bogus".to_string()
            })
        );
    }

    #[test]
    fn test_missing_description() {
        assert_eq!(
            validate("feat:", &types(&["feat"])),
            ValidationResult::Invalid(Violation::MissingDescription)
        );
    }

    #[test]
    fn test_unrestricted_scopes() {
        let config = types(&["feat"]);
        for title in ["feat: thing", "feat(core): thing", "feat(anything, else): thing"] {
            assert!(validate(title, &config).is_valid(), "'{}' should pass", title);
        }
    }

    #[test]
    fn test_grammar_failures_precede_rules() {
        let config = types(&["feat"]);
        assert_eq!(
            validate("   ", &config),
            ValidationResult::Invalid(Violation::EmptyTitle)
        );
        assert_eq!(
            validate("bogus thing", &config),
            ValidationResult::Invalid(Violation::MissingSeparator)
        );
        assert!(matches!(
            validate("bogus (x): thing", &config),
            ValidationResult::Invalid(Violation::MalformedHeader { .. })
        ));
    }

    #[test]
    fn test_report_carries_parsed_and_suggestion() {
        let config = types(&["feat"]);
        let validator = TitleValidator::new(&config);

        let report = validator.report("fix(core): thing");
        assert!(!report.result.is_valid());
        assert_eq!(report.parsed.as_ref().unwrap().commit_type, "fix");
        assert_eq!(report.suggestion.as_deref(), Some("Use one of: feat"));

        let report = validator.report("nonsense");
        assert!(report.parsed.is_none());
    }

    #[test]
    fn test_concurrent_validation() {
        let config = Arc::new(types(&["feat", "fix"]).with_scopes(["core"]));

        let handles: Vec<_> = ["feat(core): a", "fix: b", "feat(ui): c", "bogus: d"]
            .into_iter()
            .map(|title| {
                let config = Arc::clone(&config);
                std::thread::spawn(move || validate(title, &config).is_valid())
            })
            .collect();

        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![true, true, false, false]);
    }

    /// Valid iff the type is allowed, every scope token is allowed, and a
    /// breaking change names a scope.
    fn expected_valid(title: &ParsedTitle) -> bool {
        let type_ok = ["feat", "fix"].contains(&title.commit_type.as_str());
        let scopes_ok = title.scopes().iter().all(|s| ["core", "cli"].contains(s));
        let breaking_ok = !title.breaking || title.scope.is_some();
        type_ok && scopes_ok && breaking_ok
    }

    fn rule_config() -> Configuration {
        types(&["feat", "fix"])
            .with_scopes(["core", "cli"])
            .with_require_scope_for_breaking_change(true)
    }

    proptest! {
        #[test]
        fn test_any_input_is_deterministic(input in ".*") {
            let config = rule_config();
            prop_assert_eq!(validate(&input, &config), validate(&input, &config));
        }

        #[test]
        fn test_header_alphabet_is_deterministic(input in r"[ a-c!():,\-é]{0,16}") {
            let config = rule_config();
            prop_assert_eq!(validate(&input, &config), validate(&input, &config));
        }

        #[test]
        fn test_result_matches_rules(
            input in r"(feat|fix|bogus)(\((core|cli|ui)(, ?(core|cli|ui))?\))?!?: [a-z ]{0,8}[a-z]"
        ) {
            let config = rule_config();
            let parsed = ParsedTitle::parse(&input).unwrap();
            prop_assert_eq!(validate(&input, &config).is_valid(), expected_valid(&parsed));
        }

        #[test]
        fn test_grammar_failure_reported_as_is(input in "[ a-z!():,]{0,16}") {
            let config = rule_config();
            match ParsedTitle::parse(&input) {
                Ok(parsed) => {
                    prop_assert_eq!(validate(&input, &config).is_valid(), expected_valid(&parsed));
                }
                Err(violation) => {
                    prop_assert_eq!(validate(&input, &config), ValidationResult::Invalid(violation));
                }
            }
        }
    }
}
