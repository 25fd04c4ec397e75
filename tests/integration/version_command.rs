use std::process::{Command as StdCommand, Output, Stdio};

use serde_json::Value;

use crate::common::{fixture, BINARY_PATH};

fn run_version(config_fixture: &str) -> Output {
    StdCommand::new(BINARY_PATH)
        .arg("--config")
        .arg(fixture(config_fixture))
        .arg("version")
        .stdin(Stdio::null())
        .output()
        .expect("process should start")
}

fn parse_stdout(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("version prints JSON on stdout")
}

#[test]
fn version_reports_build_metadata() {
    let output = run_version("tests/fixtures/config_valid.toml");
    assert!(output.status.success(), "status: {:?}", output.status);

    let payload = parse_stdout(&output);
    assert_eq!(payload["name"], "Photoshop");
    assert_eq!(payload["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(payload["version_source"], "metadata");
}

#[test]
fn version_falls_back_when_package_is_not_installed() {
    let output = run_version("tests/fixtures/config_missing_package.toml");
    assert!(output.status.success(), "status: {:?}", output.status);

    let payload = parse_stdout(&output);
    assert_eq!(payload["name"], "Photoshop");
    assert_eq!(
        payload["description"],
        "MCP Server for Photoshop integration using photoshop-python-api"
    );
    assert_eq!(payload["version"], "0.1.0");
    assert_eq!(payload["version_source"], "fallback");
}

#[test]
fn version_with_missing_explicit_config_fails() {
    let output = run_version("tests/fixtures/does_not_exist.toml");
    assert_eq!(output.status.code(), Some(1));
}
