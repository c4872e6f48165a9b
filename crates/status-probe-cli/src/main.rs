// crates/status-probe-cli/src/main.rs
// ============================================================================
// Module: Status Probe CLI Entry Point
// Description: Command dispatcher for probe runs and config inspection.
// Purpose: Provide a localized CLI that maps probe outcomes to exit codes.
// Dependencies: clap, status-probe-core, status-probe-client, status-probe-config, tokio.
// ============================================================================

//! ## Overview
//! The status-probe CLI resolves the backend base address, executes the probe
//! suite, and renders the report as text or canonical JSON. All user-facing
//! strings are routed through the i18n catalog to prepare for future
//! localization. The process exits with success only when every check passed;
//! configuration failures are reported before any request is sent.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

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
use status_probe_cli::i18n::Locale;
use status_probe_cli::i18n::set_locale;
use status_probe_cli::t;
use status_probe_client::BackendClient;
use status_probe_config::ProbeConfig;
use status_probe_core::ProbeReport;
use status_probe_core::RunContext;
use status_probe_core::SuiteRunner;
use thiserror::Error;
use time::OffsetDateTime;
use time::macros::format_description;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable selecting the output locale.
const LANG_ENV: &str = "STATUS_PROBE_LANG";
/// Prefix for run-unique client names submitted by the create check.
const CLIENT_NAME_PREFIX: &str = "probe_client";

// ============================================================================
// SECTION: Command Surface
// ============================================================================

/// Command-line surface for the status-probe binary.
#[derive(Parser, Debug)]
#[command(name = "status-probe", about = "Conformance probe for the status check backend")]
struct Cli {
    /// Output locale for user-facing messages (en or ca).
    #[arg(long, value_name = "LANG", global = true)]
    lang: Option<String>,
    /// Prints the CLI version.
    #[arg(long = "version", action = ArgAction::SetTrue)]
    show_version: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Top-level CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs the probe suite against the configured backend.
    Run(RunCommand),
    /// Configuration inspection commands.
    Config {
        /// Config subcommand to execute.
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Arguments for the probe run.
#[derive(Args, Debug)]
struct RunCommand {
    /// Path to the environment file naming the backend base address.
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,
    /// Backend base address override (skips env-file discovery).
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
    /// Report output format (defaults to text).
    #[arg(long, value_enum, value_name = "FORMAT")]
    format: Option<ReportFormat>,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Validates backend address discovery and prints the resolved address.
    Validate(ConfigValidateCommand),
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Path to the environment file naming the backend base address.
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,
}

/// Output formats for probe reports.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum ReportFormat {
    /// Localized text lines.
    Text,
    /// Canonical JSON report.
    Json,
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
#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
async fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang.as_deref(), env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

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
        Commands::Run(command) => command_run(command).await,
        Commands::Config {
            command,
        } => command_config(&command),
    }
}

// ============================================================================
// SECTION: Run Command
// ============================================================================

/// Executes the `run` command.
async fn command_run(command: RunCommand) -> CliResult<ExitCode> {
    let config = load_config(command.base_url.as_deref(), command.env_file.as_deref())?;
    let client = BackendClient::new(config.base_url_str(), config.timeout())
        .map_err(|err| CliError::new(t!("run.client.init_failed", error = err)))?;
    let client_name = generate_client_name()?;
    let ctx = RunContext::new(client_name)
        .map_err(|err| CliError::new(t!("run.client_name.invalid", error = err)))?;
    let runner = SuiteRunner::new(config.base_url_str());
    let report = runner.run(&client, &ctx).await;

    match command.format.unwrap_or(ReportFormat::Text) {
        ReportFormat::Text => {
            for line in text_report_lines(&report) {
                write_stdout_line(&line)
                    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            }
        }
        ReportFormat::Json => {
            let bytes = canonical_report_bytes(&report)?;
            write_stdout_bytes_with_newline(&bytes)?;
        }
    }

    Ok(if report.passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Resolves the probe configuration from an override or env-file discovery.
fn load_config(base_url: Option<&str>, env_file: Option<&Path>) -> CliResult<ProbeConfig> {
    let result = match base_url {
        Some(url) => ProbeConfig::from_base_url(url),
        None => ProbeConfig::load(env_file),
    };
    result.map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Generates a run-unique client name from the current UTC timestamp.
fn generate_client_name() -> CliResult<String> {
    let stamp_format = format_description!("[year][month][day][hour][minute][second]");
    let stamp = OffsetDateTime::now_utc()
        .format(&stamp_format)
        .map_err(|err| CliError::new(t!("run.stamp.format_failed", error = err)))?;
    Ok(format!("{CLIENT_NAME_PREFIX}_{stamp}"))
}

/// Renders the report as localized text lines.
fn text_report_lines(report: &ProbeReport) -> Vec<String> {
    let mut lines = Vec::with_capacity(report.outcomes.len().saturating_add(2));
    lines.push(t!("run.header", base_url = report.base_url));
    for outcome in &report.outcomes {
        let line = match &outcome.failure {
            None => t!("run.check.pass", check = outcome.check),
            Some(failure) => t!("run.check.fail", check = outcome.check, detail = failure),
        };
        lines.push(line);
    }
    let count = report.outcomes.len();
    if report.passed() {
        lines.push(t!("run.summary.pass", count = count));
    } else {
        lines.push(t!("run.summary.fail", failed = report.failure_count(), count = count));
    }
    lines
}

/// Serializes the report as canonical JSON bytes.
fn canonical_report_bytes(report: &ProbeReport) -> CliResult<Vec<u8>> {
    serde_jcs::to_vec(report)
        .map_err(|err| CliError::new(t!("run.report.serialize_failed", error = err)))
}

// ============================================================================
// SECTION: Config Command
// ============================================================================

/// Executes the `config` command group.
fn command_config(command: &ConfigCommands) -> CliResult<ExitCode> {
    match command {
        ConfigCommands::Validate(command) => command_config_validate(command),
    }
}

/// Executes the `config validate` command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let config = load_config(None, command.env_file.as_deref())?;
    write_stdout_line(&t!("config.validate.ok", base_url = config.base_url_str()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Locale Resolution
// ============================================================================

/// Resolves the output locale from the CLI flag and environment.
fn resolve_locale(flag: Option<&str>, env: Option<&str>) -> CliResult<Locale> {
    if let Some(value) = flag {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = "--lang", value = value))
        });
    }
    if let Some(value) = env {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Prints top-level help when no subcommand is given.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes raw bytes to stdout with a trailing newline.
fn write_stdout_bytes_with_newline(bytes: &[u8]) -> CliResult<()> {
    let mut buffer = bytes.to_vec();
    buffer.push(b'\n');
    write_stdout_bytes(&buffer).map_err(|err| CliError::new(output_error("stdout", &err)))
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
