//! End-to-end runs of the `swagger-urlgen` binary against small documents.

use std::{fs, path::Path, process::Command};

const BIN: &str = env!("CARGO_BIN_EXE_swagger-urlgen");

const ITEMS_JSON: &str = r#"{
  "swagger": "2.0",
  "host": "api.example.com",
  "basePath": "/v1",
  "schemes": ["https"],
  "produces": ["application/json"],
  "paths": {
    "/items": {
      "get": {
        "operationId": "listItems",
        "parameters": [
          { "name": "id", "in": "query", "required": true },
          { "name": "verbose", "in": "query", "required": false }
        ]
      }
    },
    "/items/{status}": {
      "get": {
        "operationId": "listByStatus",
        "produces": ["text/plain"],
        "parameters": [
          { "name": "status", "in": "path", "required": true, "enum": ["open", "closed"] }
        ]
      }
    }
  }
}"#;

fn run(args: &[&str]) -> std::process::Output {
  Command::new(BIN)
    .args(["--color", "never"])
    .args(args)
    .output()
    .expect("failed to run swagger-urlgen")
}

fn write_document(dir: &Path, name: &str, content: &str) -> String {
  let path = dir.join(name);
  fs::write(&path, content).unwrap();
  path.to_string_lossy().into_owned()
}

#[test]
fn test_generate_writes_one_line_per_request() {
  let temp_dir = tempfile::tempdir().unwrap();
  let input = write_document(temp_dir.path(), "swagger.json", ITEMS_JSON);
  let output = temp_dir.path().join("nested").join("requests.txt");

  let result = run(&["generate", "-q", "-i", &input, "-o", &output.to_string_lossy()]);
  assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));

  let content = fs::read_to_string(&output).unwrap();
  assert_eq!(
    content.lines().collect::<Vec<_>>(),
    vec![
      "application/json GET https://api.example.com/v1/items?id={id}",
      "application/json GET https://api.example.com/v1/items?id={id}&verbose={verbose}",
      "text/plain GET https://api.example.com/v1/items/closed",
      "text/plain GET https://api.example.com/v1/items/open",
    ]
  );
}

#[test]
fn test_generate_to_stdout_with_template_and_host() {
  let temp_dir = tempfile::tempdir().unwrap();
  let input = write_document(temp_dir.path(), "swagger.json", ITEMS_JSON);

  let result = run(&[
    "generate",
    "--stdout",
    "-i",
    &input,
    "--host",
    "{myHost}",
    "-t",
    "{httpMethod} {url}",
    "--only",
    "listByStatus",
  ]);
  assert!(result.status.success());

  let stdout = String::from_utf8(result.stdout).unwrap();
  assert_eq!(
    stdout,
    "GET https://{myHost}/v1/items/closed\nGET https://{myHost}/v1/items/open\n"
  );
}

#[test]
fn test_generate_reads_yaml() {
  let yaml = r"
swagger: '2.0'
host: h
schemes: [http]
paths:
  /ping:
    head: {}
";
  let temp_dir = tempfile::tempdir().unwrap();
  let input = write_document(temp_dir.path(), "swagger.yaml", yaml);

  let result = run(&["generate", "--stdout", "-i", &input]);
  assert!(result.status.success());
  assert_eq!(String::from_utf8(result.stdout).unwrap(), " HEAD http://h/ping\n");
}

#[test]
fn test_missing_input_fails_without_output() {
  let temp_dir = tempfile::tempdir().unwrap();
  let input = temp_dir.path().join("absent.json");
  let output = temp_dir.path().join("requests.txt");

  let result = run(&[
    "generate",
    "-q",
    "-i",
    &input.to_string_lossy(),
    "-o",
    &output.to_string_lossy(),
  ]);
  assert!(!result.status.success());
  assert!(!output.exists());
}

#[test]
fn test_malformed_input_fails() {
  let temp_dir = tempfile::tempdir().unwrap();
  let input = write_document(temp_dir.path(), "swagger.json", "{ not json");
  let output = temp_dir.path().join("requests.txt");

  let result = run(&["generate", "-q", "-i", &input, "-o", &output.to_string_lossy()]);
  assert!(!result.status.success());
  assert!(!output.exists());
}

#[test]
fn test_list_operations_shows_ids() {
  let temp_dir = tempfile::tempdir().unwrap();
  let input = write_document(temp_dir.path(), "swagger.json", ITEMS_JSON);

  let result = run(&["list", "operations", "-i", &input]);
  assert!(result.status.success());

  let stdout = String::from_utf8(result.stdout).unwrap();
  assert!(stdout.contains("listItems"));
  assert!(stdout.contains("listByStatus"));
}

#[test]
fn test_list_operations_honours_max_optional() {
  let temp_dir = tempfile::tempdir().unwrap();
  let input = write_document(temp_dir.path(), "swagger.json", ITEMS_JSON);

  let result = run(&["list", "operations", "-i", &input, "--max-optional", "0"]);
  assert!(result.status.success());

  let stdout = String::from_utf8(result.stdout).unwrap();
  assert!(stdout.contains("skipped (1 optional)"));
}
