//! Error types for the release commands
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the release commands
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// A required input file is absent or does not contain what we need
    #[error("Missing input: {message} ({path})")]
    MissingInput { message: String, path: PathBuf },

    /// An argument was supplied that the command does not understand
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// An external tool required by the command is not installed
    #[error("Missing dependency: {dependency} is not available\n{hint}")]
    MissingDependency { dependency: String, hint: String },

    /// Process execution errors
    #[error(
        "Process error: {command} failed ({}){}",
        exit_status(.exit_code),
        stderr_tail(.stderr)
    )]
    Process {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// An external process exited cleanly but left no output behind
    #[error("Conversion failed: {message} ({path})")]
    MissingOutput { message: String, path: PathBuf },

    /// File system operation errors
    #[error("File system error: {operation} failed on {path}")]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ReleaseError {
    /// Create a new missing input error
    pub fn missing_input<P: Into<PathBuf>>(message: impl Into<String>, path: P) -> Self {
        Self::MissingInput {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new missing dependency error
    pub fn missing_dependency(dependency: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::MissingDependency {
            dependency: dependency.into(),
            hint: hint.into(),
        }
    }

    /// Create a new process error
    pub fn process(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            source: None,
        }
    }

    /// Create a process error for a command that could not be started
    pub fn spawn_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Process {
            command: command.into(),
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            source: Some(source),
        }
    }

    /// Create a new missing output error
    pub fn missing_output<P: Into<PathBuf>>(message: impl Into<String>, path: P) -> Self {
        Self::MissingOutput {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

fn exit_status(exit_code: &Option<i32>) -> String {
    exit_code.map_or_else(|| "no exit code".to_string(), |code| format!("exit code {code}"))
}

fn stderr_tail(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ReleaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dependency_message_carries_hint() {
        let err = ReleaseError::missing_dependency("m2r2", "Install with: uv pip install m2r2");
        let message = err.to_string();
        assert!(message.contains("m2r2 is not available"));
        assert!(message.contains("uv pip install m2r2"));
    }

    #[test]
    fn test_process_error_shows_exit_code_and_stderr() {
        let err = ReleaseError::process(
            "python3 -m m2r2 CHANGELOG.md --overwrite",
            Some(4),
            "",
            "Traceback: boom-detail\n",
        );
        assert_eq!(
            err.to_string(),
            "Process error: python3 -m m2r2 CHANGELOG.md --overwrite failed (exit code 4): Traceback: boom-detail"
        );
    }

    #[test]
    fn test_spawn_failure_keeps_io_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ReleaseError::spawn_failed("python3 -c import m2r2", io);
        assert_eq!(
            err.to_string(),
            "Process error: python3 -c import m2r2 failed (no exit code)"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_file_system_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ReleaseError::file_system("read", "CHANGELOG.md", io);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.to_string(), "File system error: read failed on CHANGELOG.md");
    }
}
