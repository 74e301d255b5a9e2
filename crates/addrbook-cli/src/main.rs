mod commands;
mod error;
mod repl;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::Context;
use crate::error::{exit_code_for, invalid_input, report_error};
use crate::repl::Session;
use addrbook_config as config;
use addrbook_core::{local_today, parse_date, Directory};

#[derive(Debug, Parser)]
#[command(name = "addrbook", version, about = "Assistant bot for an in-memory contact book")]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Days ahead to look for birthdays (overrides the config file)
    #[arg(long, value_name = "DAYS")]
    window_days: Option<i64>,
    /// Evaluate birthdays as of this date (DD.MM.YYYY)
    #[arg(long, value_name = "DATE")]
    today: Option<String>,
    /// Print contacts and birthday reports as JSON
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        window_days,
        today,
        json,
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let window_days = match window_days {
        Some(days) => config::validate_window_days(days).with_context(|| "--window-days")?,
        None => app_config.birthday_window_days,
    };
    let today = match today.as_deref() {
        Some(raw) => parse_date(raw)
            .map_err(|_| invalid_input(format!("invalid --today value: {raw}")))?,
        None => local_today(),
    };
    debug!(window_days, today = %today, "session settings");

    let mut directory = Directory::new();
    let mut ctx = Context {
        directory: &mut directory,
        today,
        window_days,
        json,
    };
    let session = Session {
        greeting: &app_config.greeting,
        prompt: &app_config.prompt,
    };

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    repl::run(&session, &mut ctx, stdin, &mut stdout)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
