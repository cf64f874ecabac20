use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const STORY: &str = "As a registered user, I want to login using my email and password, \
                     so that I can access my dashboard.";

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing.
///
/// XDG_CONFIG_HOME points into `env` so a developer's own configuration
/// never leaks into the tests.
fn storyplan_cmd(env: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("storyplan").expect("Failed to find storyplan binary");
    cmd.env("XDG_CONFIG_HOME", env.path()).arg("--no-color");
    cmd
}

#[test]
fn test_cli_compile_inline_text() {
    let env = create_cli_test_environment();

    storyplan_cmd(&env)
        .args(["compile", "--feature", "User Login", "--text", STORY])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Feature: User Login"))
        .stdout(predicate::str::contains(
            "As a registered user, I want to login using my email and password",
        ))
        .stdout(predicate::str::contains("## Steps"));
}

#[test]
fn test_cli_compile_json() {
    let env = create_cli_test_environment();

    let output = storyplan_cmd(&env)
        .args(["compile", "--json", "--text", "I click the login button"])
        .output()
        .expect("Failed to run storyplan");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(json["feature_name"], "Feature");
    assert_eq!(json["steps"][0]["keyword"], "When");
    assert_eq!(json["steps"][0]["text"], "I click the login button");
    assert_eq!(json["metadata"]["analysis"], "heuristic");
}

#[test]
fn test_cli_compile_files_uses_file_stems() {
    let env = create_cli_test_environment();
    let login = env.path().join("login.txt");
    let search = env.path().join("search.txt");
    fs::write(&login, "I click the login button").expect("Failed to write");
    fs::write(&search, "I open the search page").expect("Failed to write");

    let output = storyplan_cmd(&env)
        .arg("compile")
        .arg("--json")
        .arg(&login)
        .arg(&search)
        .output()
        .expect("Failed to run storyplan");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    let plans = json.as_array().expect("Expected an array of plans");
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0]["feature_name"], "login");
    assert_eq!(plans[1]["feature_name"], "search");
}

#[test]
fn test_cli_compile_multiple_files_markdown() {
    let env = create_cli_test_environment();
    let first = env.path().join("first.txt");
    let second = env.path().join("second.txt");
    fs::write(&first, "I click the login button").expect("Failed to write");
    fs::write(&second, "I open the search page").expect("Failed to write");

    storyplan_cmd(&env)
        .arg("compile")
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Feature: first"))
        .stdout(predicate::str::contains("# Feature: second"))
        .stdout(predicate::str::contains("---"));
}

#[test]
fn test_cli_compile_from_stdin() {
    let env = create_cli_test_environment();

    storyplan_cmd(&env)
        .args(["compile", "--feature", "Search"])
        .write_stdin("I open the search page\nI type 'red shoes' into the search box\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Feature: Search"))
        .stdout(predicate::str::contains("getByText('red shoes')"));
}

#[test]
fn test_cli_empty_input_fails() {
    let env = create_cli_test_environment();

    storyplan_cmd(&env)
        .args(["compile", "--text", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Text input cannot be empty"));
}

#[test]
fn test_cli_missing_file_fails() {
    let env = create_cli_test_environment();
    let missing = env.path().join("missing.txt");

    storyplan_cmd(&env)
        .arg("compile")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_cli_validate_success() {
    let env = create_cli_test_environment();

    storyplan_cmd(&env)
        .args(["validate", "--feature", "Login", "--text", STORY])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Feature: Login"))
        .stdout(predicate::str::contains("Success: plan is valid"));
}

#[test]
fn test_cli_enhanced_flag() {
    let env = create_cli_test_environment();

    storyplan_cmd(&env)
        .args([
            "--enhanced",
            "compile",
            "--json",
            "--text",
            "The visitor opens the gallery. Nice pictures",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"analysis\": \"enhanced\""));
}

#[test]
fn test_cli_config_file() {
    let env = create_cli_test_environment();
    let config = env.path().join("storyplan.json");
    fs::write(&config, r#"{ "enhanced": true }"#).expect("Failed to write");

    storyplan_cmd(&env)
        .arg("--config")
        .arg(&config)
        .args(["compile", "--json", "--text", "I click the login button"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"analysis\": \"enhanced\""));
}

#[test]
fn test_cli_invalid_config_file_fails() {
    let env = create_cli_test_environment();
    let config = env.path().join("storyplan.json");
    fs::write(&config, r#"{ "min_step_length": 0 }"#).expect("Failed to write");

    storyplan_cmd(&env)
        .arg("--config")
        .arg(&config)
        .args(["compile", "--text", "I click the login button"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
