//! Assertions over captured command output.

use std::process::Output;

/// Captured stdout, lossily decoded.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Captured stderr, lossily decoded.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[track_caller]
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, exited with {:?}\nstderr:\n{}",
        output.status.code(),
        stderr(output)
    );
}

#[track_caller]
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "expected failure, but command succeeded\nstdout:\n{}",
        stdout(output)
    );
}

#[track_caller]
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(out.contains(expected), "stdout missing {:?}:\n{}", expected, out);
}

#[track_caller]
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(err.contains(expected), "stderr missing {:?}:\n{}", expected, err);
}

/// Secrets must never reach stdout unless asked for.
#[track_caller]
pub fn assert_stdout_excludes(output: &Output, excluded: &str) {
    let out = stdout(output);
    assert!(
        !out.contains(excluded),
        "stdout unexpectedly contains {:?}:\n{}",
        excluded,
        out
    );
}
