// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! `dose-certa` command line: every screen of the vaccination portal as a
//! subcommand that prints JSON.

mod actions;
mod app;
mod commands;
mod config;
mod errors;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

use chrono::NaiveDate;
use clap::{error::ErrorKind, ArgAction, Parser, Subcommand};
use dose_certa_core::ExitCode;

use crate::app::App;
use crate::commands::{
    AlertArgs, AuthCommand, CampaignCommand, ExamCommand, NewsArgs, PatientArgs, PostArgs,
    ScheduleArgs, StockCommand, VaccinationArgs,
};
use crate::config::{validate_startup_config, AppConfig};
use crate::errors::{emit_error, CliError};

pub use config::{
    ENV_DOSE_CERTA_CREDENTIAL_POLICY, ENV_DOSE_CERTA_DATA, ENV_DOSE_CERTA_LATENCY_MS,
    ENV_DOSE_CERTA_LOG_JSON, ENV_DOSE_CERTA_UPCOMING_WINDOW_DAYS,
};

pub const CRATE_NAME: &str = "dose-certa-cli";

const DOSE_CERTA_HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
Usage: {usage}

Options:
{options}

Commands:
{subcommands}
{after-help}";

#[derive(Parser)]
#[command(name = "dose-certa", version)]
#[command(about = "Dose Certa vaccination records CLI")]
#[command(help_template = DOSE_CERTA_HELP_TEMPLATE)]
#[command(
    after_help = "Environment:\n  DOSE_CERTA_DATA               Dataset file\n  DOSE_CERTA_SESSION_DIR        Session directory\n  DOSE_CERTA_CREDENTIAL_POLICY  verified | identity-only\n  DOSE_CERTA_LOG_LEVEL          Log verbosity override"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,
    /// Dataset file; overrides DOSE_CERTA_DATA.
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Evaluation date for alerts and stock status (YYYY-MM-DD).
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },
    /// Vaccination history of the signed-in citizen.
    Vaccinations(VaccinationArgs),
    /// Overdue and upcoming doses plus notices, most urgent first.
    Alerts(AlertArgs),
    Exams {
        #[command(subcommand)]
        command: ExamCommand,
    },
    Campaigns {
        #[command(subcommand)]
        command: CampaignCommand,
    },
    /// Health posts and the vaccines they offer.
    Posts(PostArgs),
    Stock {
        #[command(subcommand)]
        command: StockCommand,
    },
    News(NewsArgs),
    Patients(PatientArgs),
    Schedule(ScheduleArgs),
    /// Summary for the signed-in user type.
    Dashboard,
    /// Vaccination certificate for the signed-in citizen.
    Certificate,
}

#[derive(Clone, Copy)]
pub(crate) struct LogFlags {
    pub(crate) quiet: bool,
    pub(crate) verbose: u8,
}

#[derive(Clone, Copy)]
pub(crate) struct OutputMode {
    pub(crate) json: bool,
}

#[must_use]
pub fn main_entry() -> ProcessExitCode {
    let wants_json = std::env::args().any(|arg| arg == "--json");
    match run() {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            emit_error(&err, wants_json);
            err.exit_code.into()
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                return Ok(());
            }
            _ => {
                return Err(CliError::usage("invalid command line arguments")
                    .with_detail("error", &err.to_string()));
            }
        },
    };
    let output_mode = OutputMode { json: cli.json };
    let command = cli
        .command
        .ok_or_else(|| CliError::usage("missing command; see --help"))?;

    let mut config = AppConfig::from_env().map_err(|msg| {
        CliError::validation(&msg).with_detail("source", "environment")
    })?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    validate_startup_config(&config).map_err(|msg| CliError::validation(&msg))?;

    logging::init_tracing(
        LogFlags {
            quiet: cli.quiet,
            verbose: cli.verbose,
        },
        config.log_json,
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| CliError::internal(format!("failed to start runtime: {e}")))?;
    runtime.block_on(dispatch(command, config, cli.today, output_mode))
}

async fn dispatch(
    command: Commands,
    config: AppConfig,
    today: Option<NaiveDate>,
    output_mode: OutputMode,
) -> Result<(), CliError> {
    let mut app = App::open(config, today)?;
    let payload = match command {
        Commands::Auth { command } => actions::auth::run(&mut app, command).await?,
        Commands::Vaccinations(args) => actions::records::vaccinations(&app, args).await?,
        Commands::Alerts(args) => actions::records::alerts(&app, args).await?,
        Commands::Exams { command } => match command {
            ExamCommand::List {
                search,
                category,
                period,
            } => actions::records::list_exams(&app, &search, &category, &period).await?,
            ExamCommand::Upload(args) => actions::records::upload_exam(&app, args).await?,
        },
        Commands::Campaigns { command } => match command {
            CampaignCommand::List {
                search,
                status,
                priority,
                period,
            } => {
                actions::records::list_campaigns(&app, &search, &status, &priority, &period)
                    .await?
            }
            CampaignCommand::Progress => actions::records::campaign_progress(&app).await?,
        },
        Commands::Posts(args) => actions::records::posts(&app, args).await?,
        Commands::News(args) => actions::records::news(&app, args).await?,
        Commands::Schedule(args) => actions::records::schedule(&app, args).await?,
        Commands::Stock { command } => match command {
            StockCommand::List => actions::professional::list_stock(&app).await?,
            StockCommand::Adjust { id, by, reason } => {
                actions::professional::adjust_stock(&app, &id, by, &reason).await?
            }
        },
        Commands::Patients(args) => actions::professional::patients(&app, args).await?,
        Commands::Dashboard => actions::dashboard::dashboard(&app).await?,
        Commands::Certificate => actions::dashboard::certificate(&app).await?,
    };
    output::emit_ok(output_mode, &payload).map_err(CliError::internal)
}
