//! External command execution
//!
//! All calls to the display utility go through [`run_command`], which takes a
//! [`CommandArgs`] implementor so the argument layout cannot drift. On top of
//! it sit the two collaborators the wizard needs: report acquisition and the
//! apply action.

use crate::command_args::{ApplyArgs, CommandArgs, QueryArgs};
use crate::error::{RandrTuiError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, error, info};

/// Output from an external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Raw standard output.
    pub stdout: Vec<u8>,
    /// Standard error, lossily decoded.
    pub stderr: String,
    /// Exit code (None if terminated by signal).
    pub exit_code: Option<i32>,
    /// Whether the command exited successfully (exit code 0).
    pub success: bool,
}

impl CommandOutput {
    /// Describe a failed run: exit code plus trimmed stderr.
    pub fn failure_description(&self, program: &str) -> String {
        let code = match self.exit_code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            format!("{} failed ({})", program, code)
        } else {
            format!("{} failed ({}): {}", program, code, stderr)
        }
    }
}

/// Run a command to completion with captured output.
///
/// Only a launch or wait failure is an `Err`; a non-zero exit is reported
/// through [`CommandOutput::success`].
pub fn run_command<T: CommandArgs>(args: &T) -> std::io::Result<CommandOutput> {
    let cli_args = args.to_cli_args();
    info!("run_command: {} args={:?}", args.program(), cli_args);

    let output = Command::new(args.program())
        .args(&cli_args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;

    let result = CommandOutput {
        stdout: output.stdout,
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        exit_code: output.status.code(),
        success: output.status.success(),
    };
    debug!(
        "{} finished: success={} exit_code={:?}",
        args.program(),
        result.success,
        result.exit_code
    );
    Ok(result)
}

/// Run the display-query command and return its stdout as text.
pub fn acquire_report(args: &QueryArgs) -> Result<String> {
    let output = run_command(args).map_err(|e| {
        error!("Failed to launch {}: {}", args.program(), e);
        RandrTuiError::acquisition(format!("failed to run {}: {}", args.program(), e))
    })?;

    if !output.success {
        let reason = output.failure_description(args.program());
        error!("Report command failed: {}", reason);
        return Err(RandrTuiError::acquisition(reason));
    }

    String::from_utf8(output.stdout).map_err(|e| {
        RandrTuiError::acquisition(format!("{} output is not valid UTF-8: {}", args.program(), e))
    })
}

/// Read a saved report from disk instead of running the query command.
pub fn read_report_file(path: &Path) -> Result<String> {
    info!("Reading display report from {}", path.display());
    std::fs::read_to_string(path).map_err(|e| {
        RandrTuiError::acquisition(format!("failed to read {}: {}", path.display(), e))
    })
}

/// Run the apply command. Success means a zero exit status.
pub fn apply_mode(args: &ApplyArgs) -> Result<()> {
    let output = run_command(args).map_err(|e| {
        RandrTuiError::apply(format!("failed to run {}: {}", args.program(), e))
    })?;

    if output.success {
        info!("Applied {} to {}", args.mode, args.output);
        Ok(())
    } else {
        Err(RandrTuiError::apply(output.failure_description(args.program())))
    }
}
