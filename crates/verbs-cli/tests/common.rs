//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![allow(dead_code)]

use assert_cmd::Command;

/// `mytool` with every environment variable it reads cleared.
#[allow(deprecated)]
pub fn mytool() -> Command {
    let mut cmd = Command::cargo_bin("mytool").expect("mytool binary should be built");
    cmd.env_remove("VERBS_LOG")
        .env_remove("VERBS_ERROR_FORMAT")
        .env_remove("VERBS_COLOR")
        .env_remove("NO_COLOR");
    cmd
}
