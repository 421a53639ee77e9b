//! Shell command execution.

use crate::error::{RadstackError, Result};
use std::process::Command;

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

/// Execute a command through the user's shell, capturing both streams.
///
/// A non-zero exit status is not an error here; it is reported through
/// [`CommandResult::success`] so callers can decide. Only a failure to
/// spawn the shell itself maps to [`RadstackError::CommandFailed`].
pub fn capture(command: &str) -> Result<CommandResult> {
    let shell = detect_shell();

    let output = Command::new(&shell)
        .arg(shell_flag())
        .arg(command)
        .output()
        .map_err(|_| RadstackError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

/// Check if running in a CI environment.
///
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Get the flag to pass commands to the shell.
///
/// Uses `-lic` (interactive login shell) on Unix so that the python and
/// pip the user actually works with are found: virtualenv and conda
/// activation, pyenv shims and the like live in `.zshrc`/`.bashrc` or the
/// login profile. In CI, `-lc` is used instead — `-i` without a TTY fails
/// trying to set up job control.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else if is_ci() {
        "-lc"
    } else {
        "-lic"
    }
}
