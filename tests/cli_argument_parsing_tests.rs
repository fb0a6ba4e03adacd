//! Tests for command line argument parsing
//!
//! These tests verify that the command line interface accepts the documented
//! flags and falls back to the documented defaults.

use emergency_care_simulator::types::config::{CliArgs, DEFAULT_CONFIG_PATH};
use emergency_care_simulator::types::OutputFormat;
use clap::Parser;

/// Test parsing with no arguments
#[test]
fn test_cli_defaults() {
    let args = CliArgs::try_parse_from(vec!["emergency-care-simulator"]).unwrap();

    assert_eq!(args.config, DEFAULT_CONFIG_PATH);
    assert_eq!(args.config, "config.txt");
    assert!(!args.header);
    assert_eq!(args.seed, None);
    assert_eq!(args.horizon, None);
    assert_eq!(args.separator, None);
    assert_eq!(args.format, OutputFormat::Csv);
    assert_eq!(args.event_log, None);
    assert!(!args.verbose);
    assert!(!args.debug);
    assert!(!args.log_json);
    assert_eq!(args.log_dir, None);
    assert!(!args.dry_run);
    assert!(!args.print_config);
}

/// Test parsing a positional configuration path
#[test]
fn test_cli_config_path() {
    let args =
        CliArgs::try_parse_from(vec!["emergency-care-simulator", "scenarios/busy.txt"]).unwrap();
    assert_eq!(args.config, "scenarios/busy.txt");
}

/// Test parsing the header flag on its own
#[test]
fn test_cli_header_flag() {
    let args = CliArgs::try_parse_from(vec!["emergency-care-simulator", "--header"]).unwrap();
    assert!(args.header);
    assert_eq!(args.config, DEFAULT_CONFIG_PATH);
}

/// Test parsing every valued option
#[test]
fn test_cli_valued_options() {
    let args = CliArgs::try_parse_from(vec![
        "emergency-care-simulator",
        "night.txt",
        "--seed",
        "42",
        "--horizon",
        "480",
        "--separator",
        ",",
        "--format",
        "json",
        "--event-log",
        "events.log",
    ])
    .unwrap();

    assert_eq!(args.config, "night.txt");
    assert_eq!(args.seed, Some(42));
    assert_eq!(args.horizon, Some(480.0));
    assert_eq!(args.separator.as_deref(), Some(","));
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.event_log.as_deref(), Some("events.log"));
}

/// Test the output format names
#[test]
fn test_cli_output_formats() {
    for (name, expected) in [
        ("csv", OutputFormat::Csv),
        ("JSON", OutputFormat::Json),
        ("text", OutputFormat::Text),
        ("txt", OutputFormat::Text),
    ] {
        let args =
            CliArgs::try_parse_from(vec!["emergency-care-simulator", "--format", name]).unwrap();
        assert_eq!(args.format, expected, "format {}", name);
    }

    let result = CliArgs::try_parse_from(vec!["emergency-care-simulator", "--format", "xml"]);
    assert!(result.is_err());
}

/// Test parsing the logging and mode flags, short and long
#[test]
fn test_cli_mode_flags() {
    let args = CliArgs::try_parse_from(vec![
        "emergency-care-simulator",
        "-v",
        "--debug",
        "--dry-run",
        "--print-config",
    ])
    .unwrap();

    assert!(args.verbose);
    assert!(args.debug);
    assert!(args.dry_run);
    assert!(args.print_config);

    let args = CliArgs::try_parse_from(vec![
        "emergency-care-simulator",
        "-d",
        "--log-json",
        "--log-dir",
        "/var/log/ecs",
    ])
    .unwrap();
    assert!(args.log_json);
    assert_eq!(args.log_dir.as_deref(), Some("/var/log/ecs"));
    assert!(args.debug);
    assert!(!args.verbose);
}

/// Test that malformed values are rejected
#[test]
fn test_cli_invalid_values() {
    let invalid_seed = CliArgs::try_parse_from(vec!["emergency-care-simulator", "--seed", "-1"]);
    assert!(invalid_seed.is_err());

    let invalid_horizon =
        CliArgs::try_parse_from(vec!["emergency-care-simulator", "--horizon", "soon"]);
    assert!(invalid_horizon.is_err());

    let unknown_flag = CliArgs::try_parse_from(vec!["emergency-care-simulator", "--turbo"]);
    assert!(unknown_flag.is_err());
}
