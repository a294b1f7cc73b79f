use http_debug_output::commands::{execute_parse, validate_args, ParseArgs};
use http_debug_output::output::read_result;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::PathBuf;

const EXCHANGE: &str = "opened\n<- \"POST /posts HTTP/1.1\r\nContent-Type: application/json\r\n\r\n\"\n<- \"{\"title\":\"foo\"}\"\n-> \"HTTP/1.1 201 Created\r\n\"\n-> \"Content-Type: application/json\r\n\"\n-> \"\r\n\"\nreading 9 bytes...\n-> \"{\"id\":1}\"\nread 9 bytes\nConn close\n";

#[test]
fn test_execute_parse_writes_result_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("debug.log");
    let output = temp_dir.path().join("out/result.json");
    std::fs::write(&input, EXCHANGE).unwrap();

    let args = ParseArgs {
        input: Some(input),
        output: Some(output.clone()),
        ..Default::default()
    };

    validate_args(&args).unwrap();
    execute_parse(args).unwrap();

    let result = read_result(&output).unwrap();
    assert_eq!(result.request.method, "POST");
    assert_eq!(result.request.payload, Some(json!({"title": "foo"})));
    assert_eq!(result.response.status, "201");
    assert_eq!(result.response.message, "Created");
    assert_eq!(result.response.payload, Some(json!({"id": 1})));
}

#[test]
fn test_execute_parse_compact_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("debug.log");
    let output = temp_dir.path().join("result.json");
    std::fs::write(&input, EXCHANGE).unwrap();

    execute_parse(ParseArgs {
        input: Some(input),
        output: Some(output.clone()),
        compact: true,
        print_summary: false,
    })
    .unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_execute_parse_reports_malformed_input() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("debug.log");
    let output = temp_dir.path().join("result.json");
    std::fs::write(&input, "opening connection to example.com:80...\nopened\n").unwrap();

    let err = execute_parse(ParseArgs {
        input: Some(input),
        output: Some(output.clone()),
        ..Default::default()
    })
    .unwrap_err();

    assert!(format!("{:#}", err).contains("Malformed trace"));
    assert!(!output.exists());
}

#[test]
fn test_validate_args_rejects_missing_input() {
    let args = ParseArgs {
        input: Some(PathBuf::from("does-not-exist.log")),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}
