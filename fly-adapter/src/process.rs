//! Subprocess execution and outcome classification.
//!
//! Split into two stages so they are testable independently: [`run_fly`]
//! spawns the process and captures its raw outcome, and the pure
//! [`classify`] folds that outcome into either the tool's JSON object or a
//! classified [`FlyError`].

use crate::error::FlyError;
use crate::types::{CommandOutput, ExecRecord, InvokeOptions, Operation};
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tokio::time::timeout;

/// Runs one fly invocation to completion and returns the raw outcome.
///
/// # Errors
///
/// Returns [`FlyError::SpawnFailed`] if the process cannot be started or an
/// I/O error occurs while waiting for it, and [`FlyError::Timeout`] when a
/// configured time limit expires (the child is killed).
pub async fn run_fly(
    path: &std::path::Path,
    op: &Operation,
    options: &InvokeOptions,
) -> Result<ExecRecord, FlyError> {
    let args = crate::cmd::build_args(op);
    let start = Instant::now();

    let mut command = Command::new(path);
    command
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(ref cwd) = options.cwd {
        command.current_dir(cwd);
    }

    for (k, v) in &options.env {
        command.env(k, v);
    }

    tracing::debug!(operation = op.name(), "running fly");

    let child = command.spawn()?;

    let output = match options.timeout {
        // On expiry the cancelled future drops the child, which kills it.
        Some(limit) => timeout(limit, child.wait_with_output())
            .await
            .map_err(|_| FlyError::Timeout(limit))??,
        None => child.wait_with_output().await?,
    };

    Ok(ExecRecord {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
        duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
    })
}

/// Folds a raw process outcome into the tool's JSON object or a classified
/// error.
///
/// - Exit 0 and stdout is a JSON object: the object.
/// - Exit 0 otherwise (empty, unparseable, or non-object stdout):
///   [`FlyError::MalformedOutput`] — silence on a claimed success is an
///   anomaly, not an empty result.
/// - Non-zero exit: the message from a structured error body on stdout if
///   one parses, else stderr, else a generic exit-status message — always
///   [`FlyError::CommandFailed`].
///
/// # Errors
///
/// See above; every non-success outcome maps to exactly one variant.
pub fn classify(record: ExecRecord) -> Result<CommandOutput, FlyError> {
    if record.exit_code == 0 {
        decode_success(&record.stdout)
    } else {
        Err(tool_failure(&record))
    }
}

fn decode_success(stdout: &str) -> Result<CommandOutput, FlyError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Err(FlyError::MalformedOutput {
            detail: "no output on a successful exit".to_string(),
        });
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(other) => Err(FlyError::MalformedOutput {
            detail: format!("expected a JSON object, got {}", json_kind(&other)),
        }),
        Err(e) => Err(FlyError::MalformedOutput {
            detail: e.to_string(),
        }),
    }
}

fn tool_failure(record: &ExecRecord) -> FlyError {
    let message = error_message(&record.stdout)
        .or_else(|| {
            let stderr = record.stderr.trim();
            (!stderr.is_empty()).then(|| stderr.to_string())
        })
        .unwrap_or_else(|| format!("fly exited with status {}", record.exit_code));

    FlyError::CommandFailed {
        message,
        exit_code: record.exit_code,
    }
}

/// Pulls the message out of a structured error body, if stdout holds one.
///
/// The tool nests its message under `error.message`; a top-level `message`
/// is accepted as well.
fn error_message(stdout: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).ok()?;
    value
        .pointer("/error/message")
        .or_else(|| value.pointer("/message"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
