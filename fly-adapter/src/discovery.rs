//! Locates the fly executable on the system.

use crate::error::FlyError;
use std::path::PathBuf;
use which::which;

/// Environment variable that overrides the default fly binary path.
pub const FLY_BIN_ENV_VAR: &str = "FLY_ADAPTER_BIN";

/// Locates the fly CLI executable.
///
/// Resolution order:
/// 1. `explicit_path` if provided and the file exists.
/// 2. The path in the `FLY_ADAPTER_BIN` environment variable.
/// 3. `fly` resolved via `$PATH`.
/// 4. Common install location fallbacks (pub-cache bin, platform-specific).
///
/// # Errors
///
/// Returns [`FlyError::ExecutableNotFound`] when no valid executable can be
/// located.
pub fn discover_fly(explicit_path: Option<PathBuf>) -> Result<PathBuf, FlyError> {
    // 1. Explicit path
    if let Some(path) = explicit_path {
        if path.exists() {
            return Ok(path);
        }
        return Err(FlyError::ExecutableNotFound(format!(
            "explicit path does not exist: {}",
            path.display()
        )));
    }

    // 2. Environment variable
    if let Ok(path_str) = std::env::var(FLY_BIN_ENV_VAR) {
        let path = PathBuf::from(path_str);
        if path.exists() {
            return Ok(path);
        }
    }

    // 3. PATH lookup
    if let Ok(path) = which("fly") {
        return Ok(path);
    }

    // 4. Common install locations
    for location in fallback_locations() {
        if location.exists() {
            return Ok(location);
        }
    }

    Err(FlyError::ExecutableNotFound(
        "searched explicit path, FLY_ADAPTER_BIN, PATH, and pub-cache bin".to_string(),
    ))
}

#[cfg(unix)]
fn fallback_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();
    if let Some(home) = dirs::home_dir() {
        // dart pub global install location
        locations.push(home.join(".pub-cache/bin/fly"));
        locations.push(home.join(".local/bin/fly"));
    }
    locations.push(PathBuf::from("/usr/local/bin/fly"));
    locations
}

#[cfg(windows)]
fn fallback_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();
    if let Some(home) = dirs::home_dir() {
        // dart pub global install location on Windows
        locations.push(home.join(r"AppData\Local\Pub\Cache\bin\fly.bat"));
    }
    locations
}
