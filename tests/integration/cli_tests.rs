use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

/// Runs the built binary with a missing config so defaults apply
fn run_binary(input: &Path, output: &Path, format: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_contact-gatherer"))
        .arg("--input")
        .arg(input)
        .arg("--output")
        .arg(output)
        .arg("--format")
        .arg(format)
        .arg("--config")
        .arg("/nonexistent/settings.toml")
        .arg("--quiet")
        .output()
        .expect("binary runs")
}

#[test]
fn test_missing_input_exits_with_one() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.json");

    let result = run_binary(&dir.path().join("absent.txt"), &output, "json");

    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
}

#[test]
fn test_comment_only_input_exits_with_one() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("urls.txt");
    std::fs::write(&input, "# only a comment\n\n").unwrap();

    let result = run_binary(&input, &dir.path().join("out.json"), "json");

    assert_eq!(result.status.code(), Some(1));
}

#[test]
fn test_unwritable_output_exits_with_one() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("urls.txt");
    std::fs::write(&input, "http://127.0.0.1:9\n").unwrap();
    let output = dir.path().join("missing-dir").join("out.csv");

    let result = run_binary(&input, &output, "csv");

    assert_eq!(result.status.code(), Some(1));
}

#[test]
fn test_failed_website_exits_with_zero() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("urls.txt");
    std::fs::write(&input, "http://127.0.0.1:9\n").unwrap();
    let output = dir.path().join("out.json");

    let result = run_binary(&input, &output, "json");

    assert_eq!(result.status.code(), Some(0));
    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("http://127.0.0.1:9"));
}

#[test]
fn test_unknown_format_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("urls.txt");
    std::fs::write(&input, "http://127.0.0.1:9\n").unwrap();

    let result = run_binary(&input, &dir.path().join("out.yaml"), "yaml");

    assert!(!result.status.success());
}
