//! Shared data types for fly CLI operations, options, and results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Organization identifier used when the caller does not supply one.
pub const DEFAULT_ORGANIZATION: &str = "com.example";

/// Target platforms used when the caller does not supply any.
pub const DEFAULT_PLATFORMS: &[Platform] = &[Platform::Ios, Platform::Android];

/// Context export destination used when the caller does not supply one.
pub const DEFAULT_CONTEXT_FILE: &str = ".ai/project_context.md";

/// Project template scaffolded by `fly create`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Bare project skeleton.
    Minimal,
    /// Riverpod-based architecture (the tool default).
    #[default]
    Riverpod,
}

impl Template {
    /// The token the fly CLI expects for this template.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Riverpod => "riverpod",
        }
    }
}

/// Target platform for a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple iOS.
    Ios,
    /// Android.
    Android,
    /// Web.
    Web,
    /// Apple macOS.
    Macos,
    /// Linux desktop.
    Linux,
    /// Windows desktop.
    Windows,
}

impl Platform {
    /// The token the fly CLI expects for this platform.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Web => "web",
            Self::Macos => "macos",
            Self::Linux => "linux",
            Self::Windows => "windows",
        }
    }
}

/// Kind of screen added by `fly add screen`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenType {
    /// Plain screen with no specialized scaffolding (the tool default).
    #[default]
    Generic,
    /// Scrollable list screen.
    List,
    /// Detail view for a single entity.
    Detail,
    /// Form with input validation scaffolding.
    Form,
    /// Settings screen.
    Settings,
}

impl ScreenType {
    /// The token the fly CLI expects for this screen type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::List => "list",
            Self::Detail => "detail",
            Self::Form => "form",
            Self::Settings => "settings",
        }
    }
}

/// Kind of service added by `fly add service`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// HTTP API client service (the tool default).
    #[default]
    Api,
    /// Repository over a data source.
    Repository,
    /// Local storage service.
    Storage,
    /// Analytics sink.
    Analytics,
}

impl ServiceType {
    /// The token the fly CLI expects for this service type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Repository => "repository",
            Self::Storage => "storage",
            Self::Analytics => "analytics",
        }
    }
}

macro_rules! impl_token_enum_str {
    ($ty:ty, [$($variant:expr),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                const CHOICES: &[$ty] = &[$($variant),+];
                CHOICES
                    .iter()
                    .copied()
                    .find(|c| c.as_str() == s)
                    .ok_or_else(|| {
                        let expected: Vec<&str> =
                            CHOICES.iter().map(|c| c.as_str()).collect();
                        format!(
                            "unknown value '{s}' (expected one of: {})",
                            expected.join(", ")
                        )
                    })
            }
        }
    };
}

impl_token_enum_str!(Template, [Template::Minimal, Template::Riverpod]);
impl_token_enum_str!(
    Platform,
    [
        Platform::Ios,
        Platform::Android,
        Platform::Web,
        Platform::Macos,
        Platform::Linux,
        Platform::Windows,
    ]
);
impl_token_enum_str!(
    ScreenType,
    [
        ScreenType::Generic,
        ScreenType::List,
        ScreenType::Detail,
        ScreenType::Form,
        ScreenType::Settings,
    ]
);
impl_token_enum_str!(
    ServiceType,
    [
        ServiceType::Api,
        ServiceType::Repository,
        ServiceType::Storage,
        ServiceType::Analytics,
    ]
);

/// Options for the `create` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    /// Project name (required positional).
    pub name: String,
    /// Project template.
    pub template: Template,
    /// Reverse-domain organization identifier.
    pub organization: String,
    /// Target platforms.
    pub platforms: Vec<Platform>,
    /// Print the generation plan without writing files.
    pub plan: bool,
}

impl CreateProject {
    /// Options for creating `name` with the documented defaults.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: Template::default(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            platforms: DEFAULT_PLATFORMS.to_vec(),
            plan: false,
        }
    }
}

/// Options for the `add screen` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddScreen {
    /// Screen name (required positional).
    pub name: String,
    /// Feature module the screen belongs to.
    pub feature: String,
    /// Kind of screen to scaffold.
    pub screen_type: ScreenType,
    /// Generate a ViewModel next to the screen.
    pub with_viewmodel: bool,
    /// Generate widget tests next to the screen.
    pub with_tests: bool,
}

impl AddScreen {
    /// Options for adding `name` under `feature` with the documented defaults.
    #[must_use]
    pub fn new(name: impl Into<String>, feature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            feature: feature.into(),
            screen_type: ScreenType::default(),
            with_viewmodel: true,
            with_tests: true,
        }
    }
}

/// Options for the `add service` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddService {
    /// Service name (required positional).
    pub name: String,
    /// Feature module the service belongs to.
    pub feature: String,
    /// Kind of service to scaffold.
    pub service_type: ServiceType,
    /// Base URL, for API services.
    pub base_url: Option<String>,
    /// Generate unit tests next to the service.
    pub with_tests: bool,
    /// Generate mocks next to the service.
    pub with_mocks: bool,
}

impl AddService {
    /// Options for adding `name` under `feature` with the documented defaults.
    #[must_use]
    pub fn new(name: impl Into<String>, feature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            feature: feature.into(),
            service_type: ServiceType::default(),
            base_url: None,
            with_tests: true,
            with_mocks: true,
        }
    }
}

/// Options for the `context export` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportContext {
    /// Destination file for the exported context.
    pub output_file: String,
    /// Include dependency information.
    pub include_dependencies: bool,
    /// Include the project structure.
    pub include_structure: bool,
    /// Include coding conventions.
    pub include_conventions: bool,
}

impl Default for ExportContext {
    fn default() -> Self {
        Self {
            output_file: DEFAULT_CONTEXT_FILE.to_string(),
            include_dependencies: true,
            include_structure: true,
            include_conventions: true,
        }
    }
}

/// Options for the `schema export` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportSchema {
    /// Restrict the export to a single command's schema.
    pub command: Option<String>,
}

/// One logical fly operation plus its options.
///
/// Each variant corresponds to one fixed argument layout in
/// [`crate::cmd::build_args`]; the variants own their options so an
/// invocation is immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Operation {
    /// `fly create <name> …`
    CreateProject(CreateProject),
    /// `fly add screen <name> …`
    AddScreen(AddScreen),
    /// `fly add service <name> …`
    AddService(AddService),
    /// `fly context export …`
    ExportContext(ExportContext),
    /// `fly schema export …`
    ExportSchema(ExportSchema),
    /// `fly doctor`
    Doctor,
    /// `fly version`
    Version,
}

impl Operation {
    /// Stable operation name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateProject(_) => "create",
            Self::AddScreen(_) => "add screen",
            Self::AddService(_) => "add service",
            Self::ExportContext(_) => "context export",
            Self::ExportSchema(_) => "schema export",
            Self::Doctor => "doctor",
            Self::Version => "version",
        }
    }
}

/// Execution settings shared by every invocation of a client.
#[derive(Debug, Clone, Default)]
pub struct InvokeOptions {
    /// Working directory for the subprocess.
    pub cwd: Option<PathBuf>,
    /// Extra environment variables passed to the subprocess.
    pub env: Vec<(String, String)>,
    /// Maximum wall-clock duration before the process is killed.
    ///
    /// `None` (the default) means the invocation may run indefinitely.
    pub timeout: Option<Duration>,
}

/// Raw outcome of one completed subprocess run.
///
/// Transient: produced by [`crate::process::run_fly`], consumed by
/// [`crate::process::classify`], never persisted.
#[derive(Debug, Clone)]
pub struct ExecRecord {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Process exit code (`-1` if unavailable).
    pub exit_code: i32,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

/// Decoded JSON object returned by a successful fly invocation.
///
/// The adapter imposes no schema beyond "a JSON object"; the fields are
/// whatever the tool printed.
pub type CommandOutput = serde_json::Map<String, serde_json::Value>;

/// Report produced by the startup probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitReport {
    /// Resolved path to the fly executable.
    pub fly_path: PathBuf,
    /// Version string reported by `fly --version`.
    pub version: String,
}
