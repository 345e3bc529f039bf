// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shell command execution.

use std::process::Output;

use pacer_core::{PacerError, Result};
use tokio::process::Command;

/// Captured output of a finished command.
///
/// A command that ran to completion always produces an `ExecOutput`, whatever
/// its exit status. `code` is `None` when the process was terminated by a
/// signal.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for ExecOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Runs a command line through the platform shell and captures its output.
///
/// Uses `sh -c` on Unix and `cmd /C` on Windows. Output is decoded lossily,
/// so invalid UTF-8 never fails the call. A non-zero exit status is data
/// (`success == false`), not an error; so is a missing program, which the
/// shell reports through its exit status.
///
/// # Errors
/// Returns an error when the command line is empty or the shell itself
/// cannot be spawned or awaited.
pub async fn exec(command: &str) -> Result<ExecOutput> {
    if command.trim().is_empty() {
        return Err(PacerError::invalid_input("command must not be empty"));
    }

    tracing::debug!(command, "spawning shell command");

    let output = shell_command(command)
        .output()
        .await
        .map_err(|source| PacerError::exec_error(format!("failed to run {command:?}"), source))?;

    Ok(output.into())
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}
