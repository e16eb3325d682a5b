//! Command Runner
//!
//! Executes CLI commands with output capture and a hard deadline.
//! Used to drive the external `trans` translation utility, one blocking
//! call per phrase.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crossbeam_channel::RecvTimeoutError;
use thiserror::Error;

/// Command runner configuration
#[derive(Debug, Clone)]
pub struct CommandOptions {
    /// Command timeout, covering both exit and the end of stdout
    pub timeout: Duration,
    /// Interval between exit-status polls
    pub poll_interval: Duration,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            poll_interval: Duration::from_millis(20),
        }
    }
}

/// Result of running a command
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Captured stdout text
    pub text: String,
    /// Exit code if the process exited normally
    pub exit_code: Option<i32>,
}

impl CommandResult {
    /// Whether the process exited with status 0
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Command runner errors
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    #[error("Binary '{0}' not found. Install it or add to PATH.")]
    BinaryNotFound(String),

    #[error("Failed to launch process: {0}")]
    LaunchFailed(String),

    #[error("Command timed out after {0:?}")]
    TimedOut(Duration),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Command runner for executing CLI tools
#[derive(Debug, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Find a binary in PATH
    pub fn which(binary: &str) -> Option<PathBuf> {
        which::which(binary).ok()
    }

    /// Resolve a binary name or path to something we can spawn
    pub fn resolve(binary: &str) -> Result<PathBuf, CommandError> {
        if std::path::Path::new(binary).exists() {
            Ok(PathBuf::from(binary))
        } else {
            Self::which(binary).ok_or_else(|| CommandError::BinaryNotFound(binary.to_string()))
        }
    }

    /// Run a command to completion and capture stdout.
    ///
    /// Stderr is discarded. The child is killed once `options.timeout`
    /// elapses; no retry is attempted. The same deadline bounds the wait
    /// for stdout to close, which a lingering grandchild can hold open.
    pub fn run(
        &self,
        binary: &str,
        args: &[String],
        options: &CommandOptions,
    ) -> Result<CommandResult, CommandError> {
        let binary_path = Self::resolve(binary)?;

        let mut cmd = Command::new(&binary_path);
        cmd.args(args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::null());

        let mut child = cmd
            .spawn()
            .map_err(|e| CommandError::LaunchFailed(e.to_string()))?;

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| CommandError::IoError("Failed to capture stdout".to_string()))?;

        // Drain stdout off-thread so a chatty child cannot block on a full pipe
        let (tx, rx) = crossbeam_channel::bounded(1);
        std::thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = tx.send(stdout.read_to_end(&mut buf).map(|_| buf));
        });

        let deadline = Instant::now() + options.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(CommandError::TimedOut(options.timeout));
                }
                Ok(None) => std::thread::sleep(options.poll_interval),
                Err(e) => return Err(CommandError::IoError(e.to_string())),
            }
        };

        let remaining = deadline.saturating_duration_since(Instant::now());
        let bytes = match rx.recv_timeout(remaining) {
            Ok(read) => read.map_err(|e| CommandError::IoError(e.to_string()))?,
            Err(RecvTimeoutError::Timeout) => {
                return Err(CommandError::TimedOut(options.timeout))
            }
            Err(RecvTimeoutError::Disconnected) => {
                return Err(CommandError::IoError("stdout reader panicked".to_string()))
            }
        };

        Ok(CommandResult {
            text: String::from_utf8_lossy(&bytes).into_owned(),
            exit_code: status.code(),
        })
    }
}
