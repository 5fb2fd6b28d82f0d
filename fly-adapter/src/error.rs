use std::time::Duration;
use thiserror::Error;

/// Errors produced while driving the fly CLI.
///
/// Every failure path of the adapter is folded into one of these variants
/// before it reaches the caller; raw exit codes or unparsed process output
/// never escape.
#[derive(Debug, Error)]
pub enum FlyError {
    /// The executable could not be located, or failed its startup probe.
    #[error("fly CLI not found: {0}. Install: dart pub global activate fly_cli")]
    ExecutableNotFound(String),

    /// The process could not be spawned at invocation time.
    ///
    /// Distinct from [`FlyError::ExecutableNotFound`]: the probe passed, but
    /// the binary has since become unusable (removed, permissions changed).
    #[error("failed to run fly: {0}")]
    SpawnFailed(#[from] std::io::Error),

    /// The tool itself reported a failure (non-zero exit).
    #[error("fly command failed (exit {exit_code}): {message}")]
    CommandFailed {
        /// Message from the tool's structured error body, or its stderr.
        message: String,
        /// Exit code of the failed invocation.
        exit_code: i32,
    },

    /// Clean exit, but stdout was not the promised JSON object.
    #[error("fly printed malformed output on a clean exit: {detail}")]
    MalformedOutput {
        /// What was wrong with the output.
        detail: String,
    },

    /// The subprocess exceeded the configured time limit.
    #[error("fly timed out after {0:?}")]
    Timeout(Duration),
}
