//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use expect_test::Expect;

/// Create a new command for the tol-helper binary.
pub fn tol_helper() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tol-helper"))
}

/// Run a command and check that stdout matches the expected output.
pub fn check_stdout(args: &[&str], expected: Expect) {
    let output = tol_helper()
        .args(args)
        .output()
        .expect("failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    expected.assert_eq(&stdout);
}

/// Run a command expected to fail and return its stderr.
pub fn failing_stderr(args: &[&str]) -> String {
    let output = tol_helper()
        .args(args)
        .output()
        .expect("failed to execute command");
    assert!(
        !output.status.success(),
        "command unexpectedly succeeded: {args:?}"
    );
    String::from_utf8_lossy(&output.stderr).into_owned()
}
