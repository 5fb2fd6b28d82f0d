//! Rust adapter for driving the fly CLI as a subprocess.
//!
//! This crate provides discovery, startup probing, and execution of the
//! `fly` command-line tool. Every invocation requests JSON output and is
//! decoded into either the tool's structured response or a classified
//! [`FlyError`] — the raw process outcome never reaches the caller.
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> Result<(), fly_adapter::FlyError> {
//! use fly_adapter::{CreateProject, FlyCli, Template};
//!
//! // Discovers the CLI and runs the version probe.
//! let fly = FlyCli::new().await?;
//!
//! let result = fly
//!     .create_project(CreateProject {
//!         template: Template::Minimal,
//!         ..CreateProject::new("my_app")
//!     })
//!     .await?;
//!
//! println!("{result:?}");
//! # Ok(())
//! # }
//! ```

/// Command-line argument construction for fly invocations.
pub mod cmd;
/// Discovery and resolution of the fly executable path.
pub mod discovery;
/// Error types returned by adapter operations.
pub mod error;
/// Startup probe confirming the fly CLI is installed and invocable.
pub mod init;
/// Subprocess execution and outcome classification.
pub mod process;
/// Shared data types for operations, options, and results.
pub mod types;

pub use discovery::{discover_fly, FLY_BIN_ENV_VAR};
pub use error::FlyError;
pub use init::init;
pub use process::{classify, run_fly};
pub use types::*;

/// High-level client for the fly CLI.
#[derive(Debug, Clone)]
pub struct FlyCli {
    /// Filesystem path to the `fly` executable.
    pub path: std::path::PathBuf,
    /// Execution settings applied to every invocation.
    pub options: InvokeOptions,
}

impl FlyCli {
    /// Discovers and probes the fly CLI, then returns a ready client.
    ///
    /// # Errors
    ///
    /// Returns [`FlyError::ExecutableNotFound`] if the CLI cannot be located
    /// or fails the version probe.
    pub async fn new() -> Result<Self, FlyError> {
        let report = init::init(None).await?;
        Ok(Self {
            path: report.fly_path,
            options: InvokeOptions::default(),
        })
    }

    /// Builds a client from a known executable path.
    ///
    /// Discovery is skipped but the version probe still runs, so a stale
    /// path fails here rather than on the first operation.
    ///
    /// # Errors
    ///
    /// Returns [`FlyError::ExecutableNotFound`] if the path fails the probe.
    pub async fn with_path(path: std::path::PathBuf) -> Result<Self, FlyError> {
        let report = init::init(Some(path)).await?;
        Ok(Self {
            path: report.fly_path,
            options: InvokeOptions::default(),
        })
    }

    /// Replaces the execution settings applied to every invocation.
    #[must_use]
    pub fn with_options(mut self, options: InvokeOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs one operation and decodes its JSON response.
    ///
    /// # Errors
    ///
    /// Returns a [`FlyError`] classifying the failure: spawn failure,
    /// tool-reported error, malformed output, or timeout.
    pub async fn invoke(&self, operation: &Operation) -> Result<CommandOutput, FlyError> {
        let record = process::run_fly(&self.path, operation, &self.options).await?;
        process::classify(record)
    }

    /// Creates a new Flutter project.
    ///
    /// # Errors
    ///
    /// See [`FlyCli::invoke`].
    pub async fn create_project(&self, config: CreateProject) -> Result<CommandOutput, FlyError> {
        self.invoke(&Operation::CreateProject(config)).await
    }

    /// Adds a screen to the project.
    ///
    /// # Errors
    ///
    /// See [`FlyCli::invoke`].
    pub async fn add_screen(&self, config: AddScreen) -> Result<CommandOutput, FlyError> {
        self.invoke(&Operation::AddScreen(config)).await
    }

    /// Adds a service to the project.
    ///
    /// # Errors
    ///
    /// See [`FlyCli::invoke`].
    pub async fn add_service(&self, config: AddService) -> Result<CommandOutput, FlyError> {
        self.invoke(&Operation::AddService(config)).await
    }

    /// Exports project context for AI consumption.
    ///
    /// # Errors
    ///
    /// See [`FlyCli::invoke`].
    pub async fn export_context(&self, config: ExportContext) -> Result<CommandOutput, FlyError> {
        self.invoke(&Operation::ExportContext(config)).await
    }

    /// Exports the CLI's command schemas.
    ///
    /// # Errors
    ///
    /// See [`FlyCli::invoke`].
    pub async fn export_schema(&self, config: ExportSchema) -> Result<CommandOutput, FlyError> {
        self.invoke(&Operation::ExportSchema(config)).await
    }

    /// Runs the tool's environment diagnostics.
    ///
    /// # Errors
    ///
    /// See [`FlyCli::invoke`].
    pub async fn doctor(&self) -> Result<CommandOutput, FlyError> {
        self.invoke(&Operation::Doctor).await
    }

    /// Reports the tool's version information.
    ///
    /// # Errors
    ///
    /// See [`FlyCli::invoke`].
    pub async fn version(&self) -> Result<CommandOutput, FlyError> {
        self.invoke(&Operation::Version).await
    }
}
