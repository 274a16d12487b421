//! Common test utilities for minicalc CLI tests.
//!
//! Every command runs with an isolated, empty config directory and without
//! `RUST_LOG`, so the developer's own configuration never leaks in.

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Result of running a minicalc CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for TestResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

fn isolated_config_home() -> PathBuf {
    Path::new(env!("CARGO_TARGET_TMPDIR")).join("minicalc-empty-config-home")
}

/// A `minicalc` command with an isolated environment
pub fn minicalc() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_minicalc"));
    cmd.env("XDG_CONFIG_HOME", isolated_config_home());
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run minicalc with the given arguments
pub fn run(args: &[&str]) -> TestResult {
    minicalc().args(args).output().unwrap().into()
}

/// Run minicalc with the given arguments, feeding `input` on stdin
pub fn run_with_stdin(args: &[&str], input: &str) -> TestResult {
    run_with_stdin_bytes(args, input.as_bytes())
}

/// Like [`run_with_stdin`], for input that need not be UTF-8
pub fn run_with_stdin_bytes(args: &[&str], input: &[u8]) -> TestResult {
    let mut child = minicalc()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child.stdin.take().unwrap().write_all(input).unwrap();

    child.wait_with_output().unwrap().into()
}
