//! Startup probe confirming the fly CLI is installed and invocable.

use crate::discovery::discover_fly;
use crate::error::FlyError;
use crate::types::InitReport;
use std::path::PathBuf;
use tokio::process::Command;

/// Discovers the fly CLI and verifies it responds to `--version`.
///
/// Intended to run once, at client construction time, so that a missing or
/// broken installation surfaces immediately instead of masquerading as a
/// failed operation later on. Logs a confirmation line on success.
///
/// # Errors
///
/// Returns [`FlyError::ExecutableNotFound`] — with the install command in
/// its message — when the executable cannot be located, cannot be run, or
/// does not produce a version string.
pub async fn init(explicit_path: Option<PathBuf>) -> Result<InitReport, FlyError> {
    let path = discover_fly(explicit_path)?;

    let output = Command::new(&path)
        .arg("--version")
        .output()
        .await
        .map_err(|e| {
            FlyError::ExecutableNotFound(format!("{} could not be run: {e}", path.display()))
        })?;

    if !output.status.success() {
        return Err(FlyError::ExecutableNotFound(format!(
            "{} exited with {} during the version probe",
            path.display(),
            output.status
        )));
    }

    let version = String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap_or("")
        .trim()
        .to_string();

    if version.is_empty() {
        return Err(FlyError::ExecutableNotFound(format!(
            "{} produced no version output",
            path.display()
        )));
    }

    tracing::info!("fly CLI found: {version}");

    Ok(InitReport {
        fly_path: path,
        version,
    })
}
