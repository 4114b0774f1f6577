mod commands;
mod render;
mod session;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use jafr_core::console::Console;
use jafr_core::date_window;
use jafr_core::settings::Settings;

use session::Session;

#[derive(Parser)]
#[command(name = "jafr")]
#[command(about = "Reminders, task completion and meeting sharing over plain-text stores")]
struct Cli {
    /// User registry in passwd format (e.g. /etc/passwd)
    registry: PathBuf,

    /// Settings file to use instead of ~/.jafr/user-settings.json
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Act as this user instead of $USER
    #[arg(long)]
    user: Option<String>,

    /// Pretend today is this date (DD/MM/YY)
    #[arg(long, value_parser = parse_today)]
    today: Option<NaiveDate>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings_path = match cli.settings {
        Some(path) => path,
        None => Settings::default_path()?,
    };

    let username = match cli.user {
        Some(name) => name,
        None => current_username()
            .context("Could not determine the current user. Set $USER or pass --user")?,
    };

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    let mut session = Session::start(settings_path, &cli.registry, &username, today)?;
    let mut console = Console::stdio();
    session.run(&mut console)
}

fn current_username() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|name| !name.is_empty())
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    date_window::parse_date(s).ok_or_else(|| format!("Invalid date '{s}'. Expected DD/MM/YY"))
}
