//! Command-line argument builder for fly invocations.
//!
//! Argument construction is a pure function of the [`Operation`]: positional
//! tokens first, named options gated by their emit policy, list values
//! comma-joined, and the trailing `--output json` pair always last. Callers
//! and tests rely on the resulting vector being stable and diffable.

use crate::types::{Operation, ScreenType, ServiceType, Template, DEFAULT_ORGANIZATION};
use std::ffi::OsString;

/// When a named option is written into the argument vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitPolicy {
    /// Emitted only when the value differs from its documented default.
    NonDefault,
    /// Emitted on every invocation, default value or not.
    Always,
}

/// `create --template`: suppressed at its default.
pub const TEMPLATE_POLICY: EmitPolicy = EmitPolicy::NonDefault;
/// `create --organization`: the tool requires it on every create.
pub const ORGANIZATION_POLICY: EmitPolicy = EmitPolicy::Always;
/// `create --platforms`: the tool requires an explicit platform list.
pub const PLATFORMS_POLICY: EmitPolicy = EmitPolicy::Always;
/// `add … --type`: suppressed at its default.
pub const TYPE_POLICY: EmitPolicy = EmitPolicy::NonDefault;
/// Default-true booleans (`--with-tests` etc.): written as `--flag=false`
/// only when the caller turns them off.
pub const BOOL_OPT_POLICY: EmitPolicy = EmitPolicy::NonDefault;
/// `context export --output-file`: the tool requires a destination.
pub const OUTPUT_FILE_POLICY: EmitPolicy = EmitPolicy::Always;

const fn emit(policy: EmitPolicy, is_default: bool) -> bool {
    matches!(policy, EmitPolicy::Always) || !is_default
}

/// Builds the argument list for one fly invocation.
#[must_use]
pub fn build_args(op: &Operation) -> Vec<OsString> {
    let mut args = Vec::new();

    match op {
        Operation::CreateProject(cfg) => {
            args.push(OsString::from("create"));
            args.push(OsString::from(&cfg.name));

            if emit(TEMPLATE_POLICY, cfg.template == Template::default()) {
                args.push(OsString::from("--template"));
                args.push(OsString::from(cfg.template.as_str()));
            }

            if emit(ORGANIZATION_POLICY, cfg.organization == DEFAULT_ORGANIZATION) {
                args.push(OsString::from("--organization"));
                args.push(OsString::from(&cfg.organization));
            }

            if !cfg.platforms.is_empty() && emit(PLATFORMS_POLICY, false) {
                let joined: Vec<&str> = cfg.platforms.iter().map(|p| p.as_str()).collect();
                args.push(OsString::from("--platforms"));
                args.push(OsString::from(joined.join(",")));
            }

            if cfg.plan {
                args.push(OsString::from("--plan"));
            }
        }

        Operation::AddScreen(cfg) => {
            args.push(OsString::from("add"));
            args.push(OsString::from("screen"));
            args.push(OsString::from(&cfg.name));
            args.push(OsString::from("--feature"));
            args.push(OsString::from(&cfg.feature));

            if emit(TYPE_POLICY, cfg.screen_type == ScreenType::default()) {
                args.push(OsString::from("--type"));
                args.push(OsString::from(cfg.screen_type.as_str()));
            }

            push_bool_opt(&mut args, "--with-viewmodel", cfg.with_viewmodel, true);
            push_bool_opt(&mut args, "--with-tests", cfg.with_tests, true);
        }

        Operation::AddService(cfg) => {
            args.push(OsString::from("add"));
            args.push(OsString::from("service"));
            args.push(OsString::from(&cfg.name));
            args.push(OsString::from("--feature"));
            args.push(OsString::from(&cfg.feature));

            if emit(TYPE_POLICY, cfg.service_type == ServiceType::default()) {
                args.push(OsString::from("--type"));
                args.push(OsString::from(cfg.service_type.as_str()));
            }

            if let Some(ref base_url) = cfg.base_url {
                args.push(OsString::from("--base-url"));
                args.push(OsString::from(base_url));
            }

            push_bool_opt(&mut args, "--with-tests", cfg.with_tests, true);
            push_bool_opt(&mut args, "--with-mocks", cfg.with_mocks, true);
        }

        Operation::ExportContext(cfg) => {
            args.push(OsString::from("context"));
            args.push(OsString::from("export"));

            if emit(OUTPUT_FILE_POLICY, false) {
                args.push(OsString::from("--output-file"));
                args.push(OsString::from(&cfg.output_file));
            }

            push_bool_opt(&mut args, "--include-dependencies", cfg.include_dependencies, true);
            push_bool_opt(&mut args, "--include-structure", cfg.include_structure, true);
            push_bool_opt(&mut args, "--include-conventions", cfg.include_conventions, true);
        }

        Operation::ExportSchema(cfg) => {
            args.push(OsString::from("schema"));
            args.push(OsString::from("export"));

            if let Some(ref command) = cfg.command {
                args.push(OsString::from("--command"));
                args.push(OsString::from(command));
            }
        }

        Operation::Doctor => args.push(OsString::from("doctor")),
        Operation::Version => args.push(OsString::from("version")),
    }

    args.push(OsString::from("--output"));
    args.push(OsString::from("json"));

    args
}

/// Writes a default-true boolean option as a single `--flag=value` token,
/// subject to [`BOOL_OPT_POLICY`].
fn push_bool_opt(args: &mut Vec<OsString>, flag: &str, value: bool, default: bool) {
    if emit(BOOL_OPT_POLICY, value == default) {
        args.push(OsString::from(format!("{flag}={value}")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        AddScreen, AddService, CreateProject, ExportContext, ExportSchema, Platform, ScreenType,
        Template,
    };

    fn strs(args: &[OsString]) -> Vec<&str> {
        args.iter().filter_map(|s| s.to_str()).collect()
    }

    #[test]
    fn create_with_defaults_yields_canonical_argv() {
        let args = build_args(&Operation::CreateProject(CreateProject::new("my_app")));
        assert_eq!(
            strs(&args),
            vec![
                "create",
                "my_app",
                "--organization",
                "com.example",
                "--platforms",
                "ios,android",
                "--output",
                "json",
            ]
        );
    }

    #[test]
    fn create_emits_template_only_when_non_default() {
        let cfg = CreateProject {
            template: Template::Minimal,
            ..CreateProject::new("my_app")
        };
        let args = build_args(&Operation::CreateProject(cfg));
        let args = strs(&args);
        assert!(
            args.windows(2).any(|w| w[0] == "--template" && w[1] == "minimal"),
            "expected '--template minimal' but got: {args:?}"
        );
    }

    #[test]
    fn create_emits_organization_even_at_default() {
        // ORGANIZATION_POLICY is Always: the default value still appears.
        let args = build_args(&Operation::CreateProject(CreateProject::new("my_app")));
        let args = strs(&args);
        assert!(
            args.windows(2)
                .any(|w| w[0] == "--organization" && w[1] == "com.example"),
            "expected '--organization com.example' but got: {args:?}"
        );
    }

    #[test]
    fn create_joins_platform_list_into_one_token() {
        let cfg = CreateProject {
            platforms: vec![Platform::Ios, Platform::Android, Platform::Web],
            ..CreateProject::new("my_app")
        };
        let args = build_args(&Operation::CreateProject(cfg));
        let args = strs(&args);
        assert!(
            args.windows(2)
                .any(|w| w[0] == "--platforms" && w[1] == "ios,android,web"),
            "expected '--platforms ios,android,web' but got: {args:?}"
        );
    }

    #[test]
    fn create_plan_flag_is_bare_and_only_when_set() {
        let off = build_args(&Operation::CreateProject(CreateProject::new("my_app")));
        assert!(!strs(&off).contains(&"--plan"));

        let cfg = CreateProject {
            plan: true,
            ..CreateProject::new("my_app")
        };
        let on = build_args(&Operation::CreateProject(cfg));
        assert!(strs(&on).contains(&"--plan"));
    }

    #[test]
    fn add_screen_with_defaults_yields_canonical_argv() {
        let args = build_args(&Operation::AddScreen(AddScreen::new("home", "auth")));
        assert_eq!(
            strs(&args),
            vec!["add", "screen", "home", "--feature", "auth", "--output", "json"]
        );
    }

    #[test]
    fn add_screen_emits_disabled_booleans_explicitly() {
        let cfg = AddScreen {
            with_viewmodel: false,
            screen_type: ScreenType::Form,
            ..AddScreen::new("login", "auth")
        };
        let args = build_args(&Operation::AddScreen(cfg));
        let args = strs(&args);
        assert!(args.contains(&"--with-viewmodel=false"));
        assert!(!args.iter().any(|a| a.starts_with("--with-tests")));
        assert!(
            args.windows(2).any(|w| w[0] == "--type" && w[1] == "form"),
            "expected '--type form' but got: {args:?}"
        );
    }

    #[test]
    fn add_service_emits_base_url_when_present() {
        let cfg = AddService {
            base_url: Some("https://api.example.com".to_string()),
            with_mocks: false,
            ..AddService::new("user", "auth")
        };
        let args = build_args(&Operation::AddService(cfg));
        let args = strs(&args);
        assert!(
            args.windows(2)
                .any(|w| w[0] == "--base-url" && w[1] == "https://api.example.com"),
            "expected '--base-url https://api.example.com' but got: {args:?}"
        );
        assert!(args.contains(&"--with-mocks=false"));
    }

    #[test]
    fn export_context_with_defaults_yields_canonical_argv() {
        let args = build_args(&Operation::ExportContext(ExportContext::default()));
        assert_eq!(
            strs(&args),
            vec![
                "context",
                "export",
                "--output-file",
                ".ai/project_context.md",
                "--output",
                "json",
            ]
        );
    }

    #[test]
    fn export_schema_scopes_to_a_single_command() {
        let args = build_args(&Operation::ExportSchema(ExportSchema {
            command: Some("create".to_string()),
        }));
        let args = strs(&args);
        assert!(
            args.windows(2).any(|w| w[0] == "--command" && w[1] == "create"),
            "expected '--command create' but got: {args:?}"
        );
    }

    #[test]
    fn every_operation_ends_with_the_json_output_pair() {
        let ops = [
            Operation::CreateProject(CreateProject::new("app")),
            Operation::AddScreen(AddScreen::new("home", "core")),
            Operation::AddService(AddService::new("user", "core")),
            Operation::ExportContext(ExportContext::default()),
            Operation::ExportSchema(ExportSchema::default()),
            Operation::Doctor,
            Operation::Version,
        ];
        for op in &ops {
            let args = build_args(op);
            let args = strs(&args);
            assert_eq!(
                &args[args.len() - 2..],
                &["--output", "json"],
                "argv for '{}' must end with the output pair: {args:?}",
                op.name()
            );
        }
    }

    #[test]
    fn option_policies_are_as_documented() {
        assert_eq!(TEMPLATE_POLICY, EmitPolicy::NonDefault);
        assert_eq!(ORGANIZATION_POLICY, EmitPolicy::Always);
        assert_eq!(PLATFORMS_POLICY, EmitPolicy::Always);
        assert_eq!(TYPE_POLICY, EmitPolicy::NonDefault);
        assert_eq!(BOOL_OPT_POLICY, EmitPolicy::NonDefault);
        assert_eq!(OUTPUT_FILE_POLICY, EmitPolicy::Always);
    }

    #[test]
    fn construction_is_deterministic() {
        let op = Operation::CreateProject(CreateProject {
            template: Template::Minimal,
            plan: true,
            ..CreateProject::new("demo")
        });
        assert_eq!(build_args(&op), build_args(&op));
    }
}
