// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests for the checktitle binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn checktitle() -> Command {
    let mut cmd = Command::cargo_bin("checktitle").unwrap();
    cmd.env_remove("PR_TITLE").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_valid_title_is_silent() {
    checktitle()
        .args(["feat(core): add thing", "--types", "feat,fix,chore", "--scopes", "core,cli", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_invalid_title_exits_one() {
    checktitle()
        .args(["bogus: add thing", "--types", "feat,fix", "--no-config"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("type-not-allowed"))
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn test_breaking_change_requires_scope() {
    checktitle()
        .args([
            "feat!: drop api",
            "--types",
            "feat",
            "--require-scope-for-breaking",
            "--no-config",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("breaking-change-requires-scope"));
}

#[test]
fn test_empty_type_list_exits_two() {
    checktitle()
        .args(["feat: add thing", "--types", "", "--no-config"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("allowed type"));
}

#[test]
fn test_missing_title_exits_two() {
    checktitle()
        .args(["--no-config"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No pull request title"));
}

#[test]
fn test_title_from_env() {
    checktitle()
        .env("PR_TITLE", "fix: patch leak")
        .args(["--no-config"])
        .assert()
        .success();
}

#[test]
fn test_title_from_stdin() {
    checktitle()
        .args(["-", "--no-config"])
        .write_stdin("docs(readme): explain flags\n")
        .assert()
        .success();
}

#[test]
fn test_json_output() {
    checktitle()
        .args(["feat(ui): add thing", "--scopes", "core", "--format", "json", "--no-config"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"code\": \"scope-not-allowed\""))
        .stdout(predicate::str::contains("\"offending\": \"ui\""));
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checktitle.toml");
    std::fs::write(
        &path,
        r#"
[rules]
types = ["feat"]
disallowed_scopes = ["release"]
"#,
    )
    .unwrap();

    checktitle()
        .arg("feat(release): cut 1.0")
        .arg("--config")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("scope-disallowed"));

    checktitle()
        .arg("fix: thing")
        .arg("--config")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("type-not-allowed"));
}

#[test]
fn test_config_discovered_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".checktitle.toml"),
        "[rules]\nrequire_scope = true\n",
    )
    .unwrap();

    checktitle()
        .current_dir(dir.path())
        .arg("feat: no scope")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("scope-required"));
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checktitle.toml");
    std::fs::write(&path, "[rules]\ntypes = [\"feat\"]\n").unwrap();

    checktitle()
        .arg("fix: thing")
        .arg("--types")
        .arg("fix")
        .arg("--config")
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_broken_config_file_exits_two() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("checktitle.toml");
    std::fs::write(&path, "[rules\n").unwrap();

    checktitle()
        .arg("feat: thing")
        .arg("--config")
        .arg(&path)
        .assert()
        .code(2);
}

#[test]
fn test_example_config() {
    checktitle()
        .arg("--example-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[rules]"));
}
