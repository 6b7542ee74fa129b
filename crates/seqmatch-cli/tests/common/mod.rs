//! Shared helpers for seqmatch end-to-end tests.
//!
//! Color and logging environment variables are pinned so output is the
//! same on every machine.

#![allow(dead_code)]

use std::process::Command;

/// Captured output from running the binary.
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

fn pin_env(cmd: &mut Command) {
    cmd.env_remove("NO_COLOR")
        .env_remove("SEQMATCH_NO_COLOR")
        .env_remove("SEQMATCH_COLOR_MATCH")
        .env_remove("SEQMATCH_COLOR_MISMATCH")
        .env_remove("SEQMATCH_COLOR_HEADING")
        .env_remove("SEQMATCH_COLOR_VALUE")
        .env("RUST_LOG", "off")
        .env("LC_ALL", "C");
}

/// Run the seqmatch binary with the given arguments.
pub fn seqmatch(args: &[&str]) -> CommandResult {
    seqmatch_with_env(args, &[])
}

/// Run the seqmatch binary with extra environment variables.
pub fn seqmatch_with_env(args: &[&str], env: &[(&str, &str)]) -> CommandResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_seqmatch"));
    cmd.args(args);
    pin_env(&mut cmd);
    for (key, value) in env {
        cmd.env(key, value);
    }
    let output = cmd.output().expect("failed to run seqmatch");
    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code().unwrap_or(128),
    }
}

/// Assert that the command exited with `expected`, printing both streams otherwise.
pub fn assert_exit_code(result: &CommandResult, expected: i32, context: &str) {
    assert_eq!(
        result.exit_code, expected,
        "{context}: expected exit {expected}, got {}\nstdout:\n{}\nstderr:\n{}",
        result.exit_code, result.stdout, result.stderr
    );
}
