//! Tests for the `fhirscope` binary's exit status and output streams.
//!
//! Parsed scopes go to stdout as one JSON line; rejections and
//! configuration errors go to stderr with a non-zero exit status.

use assert_cmd::Command;

/// Builds a `fhirscope` command isolated from the caller's environment.
fn fhirscope() -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("fhirscope");
    cmd.env_remove("RUST_LOG")
        .env_remove("FHIRSCOPE_PRETTY")
        .env_remove("FHIRSCOPE_LOG_LEVEL");
    cmd
}

#[test]
#[cfg(any(feature = "R4", feature = "R5"))]
fn test_rejected_scope_exits_with_failure() {
    let assert = fhirscope().arg("patient/Observation.rr").assert().code(1);
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(stderr.trim(), "duplicate operation: r");
    assert!(stdout.is_empty(), "unexpected stdout output: {stdout:?}");
}

#[test]
fn test_parsed_scope_printed_as_json() {
    let assert = fhirscope().arg("patient/*.cud").assert().success();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(
        stdout,
        "{\"context\":\"patient\",\"operations\":[\"c\",\"u\",\"d\"],\"resource\":\"*\"}\n"
    );
    assert!(stderr.is_empty(), "unexpected stderr output: {stderr:?}");
}

#[test]
fn test_pretty_output() {
    let assert = fhirscope()
        .args(["--pretty", "patient/*.*"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);

    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["operations"], serde_json::json!(["c", "r", "u", "d", "s"]));
    assert!(stdout.lines().count() > 1, "expected multi-line output: {stdout:?}");
}

#[test]
fn test_missing_scope_exits_with_failure() {
    let output = fhirscope().output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_version_flags_exit_cleanly() {
    for flag in ["-v", "-V", "--version"] {
        let assert = fhirscope().arg(flag).assert().success();
        let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
        assert!(
            stdout.contains(env!("CARGO_PKG_VERSION")),
            "{flag} printed {stdout:?}"
        );
    }
}

#[test]
fn test_help_flags_exit_cleanly() {
    for flag in ["-h", "--help"] {
        let assert = fhirscope().arg(flag).assert().success();
        let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
        assert!(stdout.contains("Usage"), "{flag} printed {stdout:?}");
    }
}

#[test]
fn test_invalid_log_level_reported_without_subscriber_noise() {
    let assert = fhirscope()
        .args(["--log-level", "verbose", "patient/*.r"])
        .assert()
        .code(1);
    let output = assert.get_output();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(
        stderr.trim(),
        "Configuration error: Unknown log level 'verbose', expected one of: \
         error, warn, info, debug, trace"
    );
    assert!(output.stdout.is_empty());
}
