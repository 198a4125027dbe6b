use crate::cli::run::{RunArgs, run_with_config};
use crate::conf::{ConfigError, MonitorConfig, ParseErrorPolicy};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn flags_override_config_values() {
    // Arrange
    let mut cfg = MonitorConfig {
        input: Some("from-file.txt".into()),
        ..MonitorConfig::default()
    };
    let args = RunArgs {
        input: Some("from-flag.txt".into()),
        abort_on_error: true,
        strict_directions: true,
        ..RunArgs::default()
    };

    // Act
    args.apply(&mut cfg);

    // Assert
    assert_eq!(cfg.input, Some(PathBuf::from("from-flag.txt")));
    assert_eq!(cfg.output, None);
    assert_eq!(cfg.on_parse_error, ParseErrorPolicy::Abort);
    assert!(cfg.strict_directions);
}

#[test]
fn unset_flags_keep_config_values() {
    // Arrange
    let mut cfg = MonitorConfig {
        output: Some("out.txt".into()),
        on_parse_error: ParseErrorPolicy::Abort,
        ..MonitorConfig::default()
    };
    let expected = cfg.clone();

    // Act
    RunArgs::default().apply(&mut cfg);

    // Assert
    assert_eq!(cfg, expected);
}

#[test]
fn resolve_reads_explicit_config_and_validates_overrides() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "input = \"same.txt\"\n").unwrap();
    let args = RunArgs {
        config: Some(path),
        output: Some("same.txt".into()),
        ..RunArgs::default()
    };

    // Act
    let err = args.resolve().unwrap_err();

    // Assert
    assert!(matches!(err, ConfigError::InputIsOutput { .. }));
}

#[test]
fn run_with_config_reads_and_writes_files() {
    // Arrange
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, "1 1;A;2.0\n1 2;A;4.0\n2 A\n").unwrap();
    let cfg = MonitorConfig {
        input: Some(input),
        output: Some(output.clone()),
        ..MonitorConfig::default()
    };

    // Act
    let summary = run_with_config(&cfg).unwrap();

    // Assert
    assert_eq!(summary.queries, 1);
    assert_eq!(
        fs::read_to_string(output).unwrap(),
        "Min: 2.000000, Max: 4.000000, Mean: 3.000000\n"
    );
}

#[test]
fn run_with_config_reports_missing_input() {
    // Arrange
    let dir = tempdir().unwrap();
    let cfg = MonitorConfig {
        input: Some(dir.path().join("nope.txt")),
        output: Some(dir.path().join("out.txt")),
        ..MonitorConfig::default()
    };

    // Act
    let err = run_with_config(&cfg).unwrap_err();

    // Assert
    assert!(err.to_string().contains("failed to open input"));
}
