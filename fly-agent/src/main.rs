//! AI-agent friendly front end for the fly CLI.
//!
//! Each subcommand maps onto one fly operation; results come back as
//! pretty-printed JSON on stdout so callers (humans or agents) can consume
//! them directly. Failures are printed to stderr and exit non-zero — never
//! alongside partial output.

use clap::{ArgAction, Parser, Subcommand};
use fly_adapter::{
    AddScreen, AddService, CreateProject, ExportContext, ExportSchema, FlyCli, InvokeOptions,
    Platform, ScreenType, ServiceType, Template,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Drive the fly CLI programmatically and get JSON back",
    long_about = None,
    arg_required_else_help = true
)]
struct Cli {
    /// Path to the fly executable (otherwise discovered automatically)
    #[arg(long, global = true, value_name = "PATH")]
    fly_bin: Option<PathBuf>,

    /// Kill an invocation after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create a new Flutter project
    Create {
        /// Project name
        name: String,
        /// Project template
        #[arg(long, value_name = "TEMPLATE", default_value = "riverpod")]
        template: Template,
        /// Reverse-domain organization identifier
        #[arg(long, value_name = "ORG", default_value = fly_adapter::DEFAULT_ORGANIZATION)]
        organization: String,
        /// Target platforms (comma-separated)
        #[arg(long, value_name = "PLATFORMS", value_delimiter = ',', default_value = "ios,android")]
        platforms: Vec<Platform>,
        /// Show the generation plan without writing files
        #[arg(long)]
        plan: bool,
    },

    /// Add a screen to the current project
    AddScreen {
        /// Screen name
        name: String,
        /// Feature module the screen belongs to
        #[arg(long, value_name = "FEATURE")]
        feature: String,
        /// Kind of screen to scaffold
        #[arg(long = "type", value_name = "TYPE", default_value = "generic")]
        screen_type: ScreenType,
        /// Generate a ViewModel next to the screen
        #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
        with_viewmodel: bool,
        /// Generate widget tests next to the screen
        #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
        with_tests: bool,
    },

    /// Add a service to the current project
    AddService {
        /// Service name
        name: String,
        /// Feature module the service belongs to
        #[arg(long, value_name = "FEATURE")]
        feature: String,
        /// Kind of service to scaffold
        #[arg(long = "type", value_name = "TYPE", default_value = "api")]
        service_type: ServiceType,
        /// Base URL, for API services
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        /// Generate unit tests next to the service
        #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
        with_tests: bool,
        /// Generate mocks next to the service
        #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
        with_mocks: bool,
    },

    /// Export project context for AI consumption
    ExportContext {
        /// Destination file for the exported context
        #[arg(long, value_name = "FILE", default_value = fly_adapter::DEFAULT_CONTEXT_FILE)]
        output_file: String,
        /// Include dependency information
        #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
        include_dependencies: bool,
        /// Include the project structure
        #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
        include_structure: bool,
        /// Include coding conventions
        #[arg(long, value_name = "BOOL", action = ArgAction::Set, default_value_t = true)]
        include_conventions: bool,
    },

    /// Export the CLI's command schemas
    ExportSchema {
        /// Restrict the export to a single command's schema
        #[arg(long, value_name = "COMMAND")]
        command: Option<String>,
    },

    /// Run fly's environment diagnostics
    Doctor,

    /// Report the fly CLI's version information
    Version,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut fly = match cli.fly_bin {
        Some(path) => FlyCli::with_path(path).await?,
        None => FlyCli::new().await?,
    };

    if let Some(secs) = cli.timeout {
        fly = fly.with_options(InvokeOptions {
            timeout: Some(Duration::from_secs(secs)),
            ..InvokeOptions::default()
        });
    }

    let result = match cli.command {
        Commands::Create {
            name,
            template,
            organization,
            platforms,
            plan,
        } => {
            fly.create_project(CreateProject {
                name,
                template,
                organization,
                platforms,
                plan,
            })
            .await?
        }

        Commands::AddScreen {
            name,
            feature,
            screen_type,
            with_viewmodel,
            with_tests,
        } => {
            fly.add_screen(AddScreen {
                name,
                feature,
                screen_type,
                with_viewmodel,
                with_tests,
            })
            .await?
        }

        Commands::AddService {
            name,
            feature,
            service_type,
            base_url,
            with_tests,
            with_mocks,
        } => {
            fly.add_service(AddService {
                name,
                feature,
                service_type,
                base_url,
                with_tests,
                with_mocks,
            })
            .await?
        }

        Commands::ExportContext {
            output_file,
            include_dependencies,
            include_structure,
            include_conventions,
        } => {
            fly.export_context(ExportContext {
                output_file,
                include_dependencies,
                include_structure,
                include_conventions,
            })
            .await?
        }

        Commands::ExportSchema { command } => fly.export_schema(ExportSchema { command }).await?,

        Commands::Doctor => fly.doctor().await?,

        Commands::Version => fly.version().await?,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_is_an_explicit_help_state() {
        // An empty invocation must surface help, not fall through silently.
        let err = Cli::try_parse_from(["fly-agent"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn create_args_carry_the_documented_defaults() {
        let cli = Cli::try_parse_from(["fly-agent", "create", "my_app"]).expect("parse");
        match cli.command {
            Commands::Create {
                name,
                template,
                organization,
                platforms,
                plan,
            } => {
                assert_eq!(name, "my_app");
                assert_eq!(template, Template::Riverpod);
                assert_eq!(organization, "com.example");
                assert_eq!(platforms, vec![Platform::Ios, Platform::Android]);
                assert!(!plan);
            }
            _ => panic!("parsed the wrong subcommand"),
        }
    }

    #[test]
    fn platform_list_parses_comma_separated_values() {
        let cli = Cli::try_parse_from([
            "fly-agent",
            "create",
            "my_app",
            "--platforms",
            "ios,web,macos",
        ])
        .expect("parse");
        match cli.command {
            Commands::Create { platforms, .. } => {
                assert_eq!(
                    platforms,
                    vec![Platform::Ios, Platform::Web, Platform::Macos]
                );
            }
            _ => panic!("parsed the wrong subcommand"),
        }
    }

    #[test]
    fn boolean_options_accept_explicit_values() {
        let cli = Cli::try_parse_from([
            "fly-agent",
            "add-screen",
            "login",
            "--feature",
            "auth",
            "--with-tests",
            "false",
        ])
        .expect("parse");
        match cli.command {
            Commands::AddScreen {
                with_tests,
                with_viewmodel,
                ..
            } => {
                assert!(!with_tests);
                assert!(with_viewmodel);
            }
            _ => panic!("parsed the wrong subcommand"),
        }
    }

    #[test]
    fn unknown_enum_values_are_rejected_with_the_choices() {
        let err = Cli::try_parse_from([
            "fly-agent",
            "add-service",
            "user",
            "--feature",
            "auth",
            "--type",
            "grpc",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("repository"), "got: {err}");
    }
}
