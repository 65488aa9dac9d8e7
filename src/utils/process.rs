//! Process execution utilities
//!
//! Provides safe process execution with proper error handling and logging.

use crate::error::{ReleaseError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

/// Result of a process execution
#[derive(Debug)]
pub struct ProcessResult {
    /// Exit status code
    pub exit_code: Option<i32>,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Whether the process was successful
    pub success: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Run a command in `dir` and capture its output
    ///
    /// A non-zero exit is turned into [`ReleaseError::Process`].
    #[instrument(skip(self))]
    pub fn run_command_in(&self, dir: &Path, command: &str, args: &[&str]) -> Result<ProcessResult> {
        let result = self.capture_command_in(dir, command, args)?;

        if !result.success {
            debug!("Command stderr: {}", result.stderr);
            return Err(ReleaseError::process(
                Self::command_line(command, args),
                result.exit_code,
                result.stdout,
                result.stderr,
            ));
        }

        Ok(result)
    }

    /// Run a command in `dir` and report how it exited without judging the status
    ///
    /// Only a failure to spawn is an error.
    #[instrument(skip(self))]
    pub fn capture_command_in(
        &self,
        dir: &Path,
        command: &str,
        args: &[&str],
    ) -> Result<ProcessResult> {
        let cmd_str = Self::command_line(command, args);

        if self.debug {
            debug!("Running command in {}: {}", dir.display(), cmd_str);
        } else {
            info!("+ {}", cmd_str);
        }

        let output = Command::new(command)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ReleaseError::spawn_failed(cmd_str.clone(), e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let success = output.status.success();
        let exit_code = output.status.code();

        debug!(
            "Command finished: success={}, exit_code={:?}, stdout_len={}, stderr_len={}",
            success,
            exit_code,
            stdout.len(),
            stderr.len()
        );

        Ok(ProcessResult {
            exit_code,
            stdout,
            stderr,
            success,
        })
    }

    /// Check if a command exists in PATH (or is an executable path)
    #[instrument(skip(self))]
    pub fn command_exists(&self, command: &str) -> bool {
        match which::which(command) {
            Ok(path) => {
                debug!("Command '{}' resolved to {}", command, path.display());
                true
            }
            Err(e) => {
                debug!("Command '{}' not found: {}", command, e);
                false
            }
        }
    }

    fn command_line(command: &str, args: &[&str]) -> String {
        std::iter::once(command)
            .chain(args.iter().copied())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_process_runner_creation() {
        let runner = ProcessRunner::new(true);
        assert!(runner.debug);

        let runner = ProcessRunner::default();
        assert!(!runner.debug);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_command_in_uses_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("CHANGELOG.md"), "# Changelog").unwrap();

        let runner = ProcessRunner::new(false);
        let result = runner
            .run_command_in(temp_dir.path(), "ls", &[])
            .unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("CHANGELOG.md"));
    }

    #[test]
    fn test_command_exists() {
        let runner = ProcessRunner::new(false);

        #[cfg(unix)]
        assert!(runner.command_exists("sh"));

        assert!(!runner.command_exists("nonexistent_command_12345"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_failing_command() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ProcessRunner::new(false);
        let result = runner.run_command_in(temp_dir.path(), "false", &[]);

        if let Err(ReleaseError::Process {
            command, exit_code, ..
        }) = result
        {
            assert_eq!(command, "false");
            assert_eq!(exit_code, Some(1));
        } else {
            panic!("Expected ProcessError");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_reports_failure_without_error() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ProcessRunner::new(false);
        let result = runner
            .capture_command_in(temp_dir.path(), "sh", &["-c", "echo oops >&2; exit 3"])
            .unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert_eq!(result.stderr.trim(), "oops");
    }

    #[test]
    fn test_spawn_failure_is_process_error() {
        let temp_dir = TempDir::new().unwrap();
        let runner = ProcessRunner::new(false);
        let result = runner.capture_command_in(temp_dir.path(), "nonexistent_command_12345", &[]);

        match result {
            Err(err @ ReleaseError::Process { exit_code: None, .. }) => {
                assert!(std::error::Error::source(&err).is_some());
            }
            other => panic!("Expected spawn failure, got {other:?}"),
        }
    }

    #[test]
    fn test_command_line_has_no_trailing_space() {
        assert_eq!(ProcessRunner::command_line("false", &[]), "false");
        assert_eq!(
            ProcessRunner::command_line("python3", &["-m", "m2r2", "CHANGELOG.md"]),
            "python3 -m m2r2 CHANGELOG.md"
        );
    }
}
