//! Argument parsing and command dispatch.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use relay_config::RelaySettings;
use relay_telemetry::{LogFormat, LoggingConfig, build_sha, init_logging};
use tracing::{Instrument, Span, info_span, warn};
use uuid::Uuid;

use crate::client::{AppContext, CliError, CliResult};
use crate::commands::files::{handle_first_line, handle_funny};
use crate::commands::network::{handle_github, handle_status};
use crate::commands::settings::handle_settings;
use crate::commands::token::handle_token;
use crate::output::render_value;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Parses CLI arguments, runs the requested operation, and prints its output.
/// Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    let trace_id = Uuid::new_v4().to_string();

    let settings = match RelaySettings::from_env() {
        Ok(settings) => settings,
        Err(err) => return report(&CliError::from(err)),
    };
    install_logging(&settings);

    let span = command_span(&cli.command, &trace_id);
    match execute(cli, settings).instrument(span).await {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => report(&err),
    }
}

/// Run a parsed command against `settings` and return the rendered output.
pub(crate) async fn execute(cli: Cli, settings: RelaySettings) -> CliResult<String> {
    let operation = command_label(&cli.command);
    let ctx = AppContext::new(settings, cli.delivery, Duration::from_secs(cli.timeout))?;

    let value = match cli.command {
        Command::FirstLine(args) => handle_first_line(&ctx, args).await?,
        Command::Funny(args) => handle_funny(&ctx, args).await?,
        Command::Status(args) => handle_status(&ctx, args).await?,
        Command::Github(args) => handle_github(&ctx, args).await?,
        Command::Token => handle_token(&ctx).await?,
        Command::Settings => handle_settings(&ctx)?,
    };
    render_value(cli.output, operation, &value)
}

fn install_logging(settings: &RelaySettings) {
    let config = LoggingConfig {
        level: &settings.log_level,
        format: LogFormat::from_setting(settings.log_format.as_deref()),
        build_sha: option_env!("RELAY_BUILD_SHA").unwrap_or("dev"),
    };
    if let Err(err) = init_logging(&config) {
        warn!(error = %err, "logging already initialised");
    }
}

fn command_span(command: &Command, trace_id: &str) -> Span {
    info_span!(
        "relay.cli",
        command = command_label(command),
        trace_id = %trace_id,
        build_sha = %build_sha()
    )
}

fn report(err: &CliError) -> i32 {
    eprintln!("error: {}", err.display_message());
    err.exit_code()
}

#[derive(Parser)]
#[command(name = "relay", about = "Run file, HTTP, and token operations from the shell")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "RELAY_DELIVERY",
        value_enum,
        default_value_t = DeliveryMode::Result,
        help = "Call the single-outcome form or the callback form of each operation"
    )]
    pub(crate) delivery: DeliveryMode,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Select output format"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "RELAY_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds to wait for an operation before giving up"
    )]
    pub(crate) timeout: u64,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print the first line of a UTF-8 file.
    FirstLine(PathArgs),
    /// Fetch a URL and print the response status code.
    Status(UrlArgs),
    /// Fetch a GitHub user profile.
    Github(GithubArgs),
    /// Print a random 40-character hex token.
    Token,
    /// Print a file with " lol" appended to every line.
    Funny(PathArgs),
    /// Print the effective settings.
    Settings,
}

#[derive(Args)]
pub(crate) struct PathArgs {
    #[arg(help = "Path of the file to read")]
    pub(crate) path: PathBuf,
}

#[derive(Args)]
pub(crate) struct UrlArgs {
    #[arg(help = "URL to request")]
    pub(crate) url: String,
}

#[derive(Args)]
pub(crate) struct GithubArgs {
    #[arg(help = "GitHub username")]
    pub(crate) username: String,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum DeliveryMode {
    #[default]
    Result,
    Callback,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub(crate) const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::FirstLine(_) => "first_line",
        Command::Status(_) => "http_status",
        Command::Github(_) => "github_profile",
        Command::Token => "random_token",
        Command::Funny(_) => "funny_file",
        Command::Settings => "settings",
    }
}
