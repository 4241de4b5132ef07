//! External command evaluation.

use crate::check::CheckResult;
use crate::error::{MedicError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Captured output of an external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandOutput {
    /// Standard output followed by standard error.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Run `command` with `args` and capture its output.
///
/// The command is spawned directly, not through a shell, with no stdin.
/// Blocks until the process exits; there is no timeout. Fails only if the
/// process cannot be spawned.
pub fn capture(command: &str, args: &[&str]) -> Result<CommandOutput> {
    let start = Instant::now();
    debug!("Running {} {:?}", command, args);

    let output = Command::new(command)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;

    let duration = start.elapsed();
    debug!(
        "{} exited with {:?} after {:?}",
        command,
        output.status.code(),
        duration
    );

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration,
        success: output.status.success(),
    })
}

/// Check that a command exits 0.
///
/// A non-zero exit yields [`CheckResult::Error`] with the combined output
/// and `remedy`. The output is all of stdout followed by all of stderr, so
/// lines the process interleaved between the two streams are not kept in
/// their original order. A command that cannot be spawned (typically because it
/// is not installed) is reported the same way.
pub fn command_succeeds(command: &str, args: &[&str], remedy: &str) -> CheckResult {
    match capture(command, args) {
        Ok(output) if output.success => CheckResult::Ok,
        Ok(output) => CheckResult::error(output.combined(), remedy),
        Err(e) => spawn_failure(command, e, remedy),
    }
}

/// Check that a command exits 0 and its output contains `needle`.
pub fn command_output_contains(
    command: &str,
    args: &[&str],
    needle: &str,
    remedy: &str,
) -> CheckResult {
    match capture(command, args) {
        Ok(output) if !output.success => CheckResult::error(output.combined(), remedy),
        Ok(output) => {
            let combined = output.combined();
            if combined.contains(needle) {
                CheckResult::Ok
            } else {
                CheckResult::error(
                    format!("Expected output to contain {:?}, got:\n{}", needle, combined),
                    remedy,
                )
            }
        }
        Err(e) => spawn_failure(command, e, remedy),
    }
}

fn spawn_failure(command: &str, err: MedicError, remedy: &str) -> CheckResult {
    let explanation = match err {
        MedicError::Io(io) => format!("{}: {}", command, io),
        other => format!("{}: {}", command, other),
    };
    warn!("Could not run {}", explanation);
    CheckResult::error(explanation, remedy)
}
