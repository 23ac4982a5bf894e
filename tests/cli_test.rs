use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn generate_bin() -> Command {
    Command::cargo_bin("generate-angular-config").unwrap()
}

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("blueprint.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn generates_constant_from_blueprint_config() {
    let temp = TempDir::new().unwrap();
    let input = write_input(
        &temp,
        r#"{
            "database": {"host": "localhost"},
            "angularConfig": {"apiUrl": "http://x", "debug": "true"}
        }"#,
    );
    let output = temp.path().join("config.js");

    generate_bin()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "angular.module('blueprint').constant('configuration', {\n    apiUrl: \"http://x\",\n    debug: \"true\"\n});"
    );
}

#[test]
fn quotes_every_value_once_in_key_order() {
    let temp = TempDir::new().unwrap();
    let input = write_input(
        &temp,
        r#"{"angularConfig": {"b": 42, "a": true, "c": null, "d": "text"}}"#,
    );
    let output = temp.path().join("config.js");

    generate_bin().arg(&input).arg(&output).assert().success();

    let content = fs::read_to_string(&output).unwrap();
    let body: Vec<&str> = content.lines().skip(1).take(4).map(str::trim).collect();
    assert_eq!(
        body,
        vec!["b: \"42\",", "a: \"true\",", "c: \"null\",", "d: \"text\""]
    );
    assert_eq!(content.matches("b: ").count(), 1);
}

#[test]
fn second_run_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, r#"{"angularConfig": {"a": "1", "b": "2"}}"#);
    let output = temp.path().join("config.js");

    generate_bin().arg(&input).arg(&output).assert().success();
    let first = fs::read(&output).unwrap();
    generate_bin().arg(&input).arg(&output).assert().success();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_field_fails_and_keeps_previous_output() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, r#"{"serverConfig": {"a": "1"}}"#);
    let output = temp.path().join("config.js");
    fs::write(&output, "previous build").unwrap();

    generate_bin()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field: angularConfig"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "previous build");
}

#[test]
fn missing_field_does_not_create_output() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, r#"{}"#);
    let output = temp.path().join("config.js");

    generate_bin().arg(&input).arg(&output).assert().failure();

    assert!(!output.exists());
}

#[test]
fn malformed_json_fails_without_output() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, r#"{"angularConfig": {"a": "1""#);
    let output = temp.path().join("config.js");

    generate_bin()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON"));

    assert!(!output.exists());
}

#[test]
fn missing_input_file_fails() {
    let temp = TempDir::new().unwrap();

    generate_bin()
        .arg(temp.path().join("absent.json"))
        .arg(temp.path().join("config.js"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn nested_value_is_rejected() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, r#"{"angularConfig": {"auth": {"clientId": "x"}}}"#);
    let output = temp.path().join("config.js");

    generate_bin()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'auth'"));

    assert!(!output.exists());
}

#[test]
fn unwritable_output_fails() {
    let temp = TempDir::new().unwrap();
    let input = write_input(&temp, r#"{"angularConfig": {"a": "1"}}"#);

    generate_bin()
        .arg(&input)
        .arg(temp.path().join("missing-dir").join("config.js"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write output file"));
}

#[test]
fn missing_arguments_print_usage() {
    generate_bin()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("INPUT_FILE"));
}

#[test]
fn help_lists_positional_arguments() {
    generate_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("INPUT_FILE"))
        .stdout(predicate::str::contains("OUTPUT_FILE"));
}
