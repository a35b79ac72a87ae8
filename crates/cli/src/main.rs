// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ew - Earn & Win account ledger CLI

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod completions;
mod config;
mod error;
mod logging;
mod opener;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::account::{self, Credentials};
use commands::task::TaskArgs;
use commands::withdraw::WithdrawArgs;
use commands::{shell, task, withdraw, App};
use completions::CompletionsArgs;
use config::{Config, Overrides};
use error::EwError;
use ew_storage::{JsonFileStore, Ledger};
use opener::{LinkOpener, PrintOpener, SystemOpener};
use output::OutputFormat;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "ew",
    version,
    about = "Earn & Win - complete tasks, earn coins, request withdrawals"
)]
struct Cli {
    /// Account store file [default: users.json]
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Config file [default: ew.toml when present]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Open task links in the system browser
    #[arg(long, global = true)]
    open: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Signup(Credentials),
    /// Check a username and password
    Login(Credentials),
    /// Show balance, counters, and withdrawal standing
    Status(Credentials),
    /// Complete a task and collect its reward
    Task(TaskArgs),
    /// List available tasks
    Tasks,
    /// Request a withdrawal
    Withdraw(WithdrawArgs),
    /// Start an interactive session
    Shell,
    /// Generate shell completions
    Completions(CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<EwError>() {
                Some(user_error) => eprint!("{}", user_error),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Completions need neither config nor store
    if let Commands::Completions(args) = &cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(());
    }

    let overrides = Overrides {
        store: cli.store,
        config: cli.config,
        open_links: cli.open,
    };
    let cwd = std::env::current_dir()?;
    let config = Config::resolve(&overrides, |key| std::env::var(key).ok(), &cwd)?;
    let _log_guard = logging::setup_logging(&config)?;
    tracing::debug!(store = %config.store_path.display(), "configuration resolved");

    if let Commands::Tasks = cli.command {
        output::print_list(&task::catalog(), cli.format)?;
        return Ok(());
    }

    let ledger = Ledger::open(JsonFileStore::new(&config.store_path))
        .map_err(|e| EwError::store_unreadable(&config.store_path, e))?;
    let opener: Box<dyn LinkOpener> = if config.open_links {
        Box::new(SystemOpener)
    } else {
        Box::new(PrintOpener)
    };
    let mut app = App::new(ledger, opener);

    match cli.command {
        Commands::Signup(creds) => {
            account::signup(&mut app.ledger, &creds.username, &creds.password)?;
            println!("Account created successfully! Please log in now.");
        }
        Commands::Login(creds) => {
            account::login(&app.ledger, &creds.username, &creds.password)?;
            println!("Welcome, {}!", creds.username);
        }
        Commands::Status(creds) => {
            account::login(&app.ledger, &creds.username, &creds.password)?;
            let status = account::status(&app.ledger, &app.policy, &creds.username)?;
            output::print(&status, cli.format)?;
        }
        Commands::Task(args) => {
            let creds = &args.credentials;
            account::login(&app.ledger, &creds.username, &creds.password)?;
            // Notices stay off stdout so `--format json` output parses
            let receipt =
                task::perform(&mut app, &creds.username, args.kind, &mut io::stderr())?;
            output::print(&receipt, cli.format)?;
        }
        Commands::Withdraw(args) => {
            let creds = &args.credentials;
            account::login(&app.ledger, &creds.username, &creds.password)?;
            let request = withdraw::request(&app, &creds.username, args.amount, args.method)?;
            output::print(&request, cli.format)?;
        }
        Commands::Shell => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            shell::run(
                &mut app,
                stdin.lock(),
                &mut io::stdout().lock(),
                cli.format,
                interactive,
            )?;
        }
        Commands::Tasks | Commands::Completions(_) => {}
    }

    Ok(())
}
