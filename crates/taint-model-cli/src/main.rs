// crates/taint-model-cli/src/main.rs
// ============================================================================
// Module: Taint Model CLI Entry Point
// Description: Command dispatcher for taint model generation workflows.
// Purpose: Provide a localized CLI that renders, checks, and validates models.
// Dependencies: clap, taint-model-config, taint-model-core, thiserror, tracing.
// ============================================================================

//! ## Overview
//! `taint-model-gen` reads discovered view signatures from a JSON file, runs
//! the taint stub generator with the configured whitelists and annotations,
//! and writes the resulting model file. `check` re-renders and compares
//! against the committed file so CI can detect drift.
//!
//! Stdout carries only the model payload or a one-line result; diagnostics go
//! through `tracing` to stderr. All user-facing strings are routed through the
//! i18n catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use taint_model_cli::i18n::Locale;
use taint_model_cli::i18n::set_locale;
use taint_model_cli::t;
use taint_model_config::TaintModelConfig;
use taint_model_core::JsonFileSource;
use taint_model_core::ModelOrder;
use taint_model_core::RestApiSourceGenerator;
use taint_model_core::render_model_file;
use thiserror::Error;
use tracing::debug;
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "TAINT_MODEL_LANG";
/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "TAINT_MODEL_LOG";
/// Filter applied when neither `--log-level` nor [`LOG_ENV`] is set.
const DEFAULT_LOG_FILTER: &str = "warn";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "taint-model-gen", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `TAINT_MODEL_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Diagnostic verbosity on stderr (overrides `TAINT_MODEL_LOG`).
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    log_level: Option<LogLevelArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render taint models and write the model file.
    Generate(ModelArgs),
    /// Verify the model file matches freshly rendered models.
    Check(ModelArgs),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Inputs shared by `generate` and `check`; flags override config values.
#[derive(Args, Debug, Default)]
struct ModelArgs {
    /// Optional config file path (defaults to taint-models.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// JSON signature file (overrides `signatures.path`).
    #[arg(long, value_name = "PATH")]
    signatures: Option<PathBuf>,
    /// Model file path (overrides `output.path`).
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Stub ordering (overrides `output.order`).
    #[arg(long, value_enum, value_name = "ORDER")]
    order: Option<OrderArg>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a taint model configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for `config validate`.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to taint-models.toml or env override).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

/// Supported diagnostic levels.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LogLevelArg {
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Generation summaries.
    Info,
    /// Per-view decisions.
    Debug,
    /// Everything.
    Trace,
}

/// Supported model orderings.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OrderArg {
    /// Keep discovery order.
    Input,
    /// Sort and deduplicate stubs.
    Sorted,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }
    let env_log = std::env::var(LOG_ENV).ok();
    init_tracing(resolve_log_filter(cli.log_level, env_log.as_deref())?);

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Generate(args) => command_generate(&args),
        Commands::Check(args) => command_check(&args),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Model Commands
// ============================================================================

/// Fully resolved inputs for a model run.
#[derive(Debug)]
struct ModelPlan {
    /// Loaded and validated configuration.
    config: TaintModelConfig,
    /// Signature file to read.
    signatures: PathBuf,
    /// Model file path; stdout when absent.
    output: Option<PathBuf>,
    /// Stub ordering.
    order: ModelOrder,
}

/// Rendered model file contents.
#[derive(Debug)]
struct RenderedModels {
    /// File contents, newline-terminated.
    content: String,
    /// Number of stub lines in `content`.
    count: usize,
}

/// Executes the `generate` command.
fn command_generate(args: &ModelArgs) -> CliResult<ExitCode> {
    let plan = resolve_plan(args)?;
    let rendered = render_models(&plan)?;
    match &plan.output {
        Some(path) => {
            write_model_file(path, &rendered.content)?;
            info!(path = %path.display(), models = rendered.count, "wrote model file");
            write_stdout_line(&t!("generate.ok", count = rendered.count, path = path.display()))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
        None => write_stdout_bytes(rendered.content.as_bytes())
            .map_err(|err| CliError::new(output_error("stdout", &err)))?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes the `check` command.
fn command_check(args: &ModelArgs) -> CliResult<ExitCode> {
    let plan = resolve_plan(args)?;
    let Some(path) = plan.output.as_deref() else {
        return Err(CliError::new(t!("check.output.missing")));
    };
    let rendered = render_models(&plan)?;
    check_model_file(path, &rendered.content)?;
    write_stdout_line(&t!("check.ok", path = path.display(), count = rendered.count))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Loads config and applies flag overrides.
fn resolve_plan(args: &ModelArgs) -> CliResult<ModelPlan> {
    let config = TaintModelConfig::load(args.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    apply_overrides(config, args)
}

/// Merges command-line flags over loaded configuration.
fn apply_overrides(config: TaintModelConfig, args: &ModelArgs) -> CliResult<ModelPlan> {
    let signatures = args
        .signatures
        .clone()
        .or_else(|| config.signatures.path())
        .ok_or_else(|| CliError::new(t!("models.signatures.missing")))?;
    let output = args.output.clone().or_else(|| config.output.path());
    let order = args.order.map_or(config.output.order, ModelOrder::from);
    debug!(
        signatures = %signatures.display(),
        output = ?output,
        order = order.as_str(),
        "resolved model run"
    );
    Ok(ModelPlan {
        config,
        signatures,
        output,
        order,
    })
}

/// Reads signatures and renders the model file contents.
fn render_models(plan: &ModelPlan) -> CliResult<RenderedModels> {
    let source = JsonFileSource::new(&plan.signatures);
    let generator = RestApiSourceGenerator::new(source, plan.config.generator_config());
    let models = generator.generate_models().map_err(|err| {
        CliError::new(t!("models.signatures.failed", path = plan.signatures.display(), error = err))
    })?;
    let content = render_model_file(&models, plan.order);
    let count = content.lines().count();
    Ok(RenderedModels {
        content,
        count,
    })
}

/// Writes the model file through a temporary sibling and an atomic rename.
fn write_model_file(path: &Path, contents: &str) -> CliResult<()> {
    let io_error =
        |err: std::io::Error| CliError::new(t!("generate.write_failed", path = path.display(), error = err));
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let temp_path = path.with_extension("tmp");
    let mut file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(io_error)?;
    file.write_all(contents.as_bytes()).map_err(io_error)?;
    file.sync_all().map_err(io_error)?;
    fs::rename(&temp_path, path).map_err(io_error)?;
    Ok(())
}

/// Compares rendered contents against the on-disk model file.
fn check_model_file(path: &Path, contents: &str) -> CliResult<()> {
    let existing = fs::read_to_string(path)
        .map_err(|err| CliError::new(t!("check.read_failed", path = path.display(), error = err)))?;
    if existing != contents {
        return Err(CliError::new(t!("check.drift", path = path.display())));
    }
    Ok(())
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the config validation command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let _config = TaintModelConfig::load(command.config.as_deref())
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    write_stdout_line(&t!("config.validate.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Resolution Helpers
// ============================================================================

/// Resolves the CLI locale from flags or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

/// Resolves the diagnostic filter from flags or environment.
fn resolve_log_filter(level: Option<LogLevelArg>, env_log: Option<&str>) -> CliResult<EnvFilter> {
    if let Some(level) = level {
        return Ok(EnvFilter::new(level.as_str()));
    }
    match env_log.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => EnvFilter::try_new(value).map_err(|err| {
            CliError::new(t!("log.filter.invalid_env", env = LOG_ENV, value = value, error = err))
        }),
        None => Ok(EnvFilter::new(DEFAULT_LOG_FILTER)),
    }
}

/// Installs the stderr `tracing` subscriber.
fn init_tracing(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init();
}

impl LogLevelArg {
    /// Returns the filter directive for this level.
    const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Converts CLI language selections into locales.
impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

/// Converts CLI order selections into model orderings.
impl From<OrderArg> for ModelOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Input => Self::Input,
            OrderArg::Sorted => Self::Sorted,
        }
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)?;
    stdout.flush()
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
