// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Types accepted when none are configured.
pub const DEFAULT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert",
];

/// The default allowed types as owned strings.
pub fn default_types() -> Vec<String> {
    DEFAULT_TYPES.iter().map(|t| t.to_string()).collect()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# checktitle configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

[rules]
types = ["feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert"]

# Empty means any scope is accepted
scopes = ["core", "cli", "config", "rules"]
disallowed_scopes = ["release"]

require_scope = false
require_scope_for_breaking_change = true

# The whole description must match
subject_pattern = "^[a-z].*$"
"#
}
