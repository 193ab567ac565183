use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{OptionExt, Result};

mod confirm;
mod delegation;
mod domain;
mod event;
mod exchange;
mod handler;
mod i18n;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::{
    confirm::ConfirmScreen,
    delegation::SelectorContext,
    domain::{Snapshot, StakeError},
    event::Action,
    exchange::{ExchangeMode, exchange_config, is_currency_supported},
    handler::handle_event,
    state::{App, AppConfig},
    tui::Tui,
};

// LazyStake version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How long to wait for input before redrawing.
const TICK_RATE: Duration = Duration::from_millis(250);

/// LazyStake - Terminal UI for reviewing Solana staking transactions
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run; defaults to confirming the last snapshot
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Review a transaction before signing it
    Confirm {
        /// Snapshot file; the last one opened when omitted
        snapshot: Option<PathBuf>,
        /// Print the screen as plain text instead of opening the UI
        #[arg(long)]
        print: bool,
    },
    /// Pick the delegation a transaction operates on
    Select {
        /// Snapshot file; the last one opened when omitted
        snapshot: Option<PathBuf>,
        /// Only offer delegations with pending rewards
        #[arg(long)]
        claim: bool,
    },
    /// Show the buy/sell widget configuration for a currency
    Exchange {
        /// BUY or SELL
        mode: ExchangeMode,
        /// Currency id, e.g. `bitcoin`
        currency: String,
    },
    /// Display version information
    Version,
}

/// Application entry point
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if let Err(err) = logging::init(&config) {
        eprintln!("Logging disabled: {err}");
    }

    match cli.command.unwrap_or(Commands::Confirm {
        snapshot: None,
        print: false,
    }) {
        Commands::Version => {
            println!("LazyStake v{VERSION}");
            println!("A terminal UI for reviewing Solana staking transactions");
            Ok(())
        }
        Commands::Exchange { mode, currency } => {
            run_exchange(mode, &currency);
            Ok(())
        }
        Commands::Confirm {
            snapshot,
            print: true,
        } => print_screen(&config, snapshot),
        Commands::Confirm { snapshot, .. } => run_tui(&mut config, snapshot, None),
        Commands::Select { snapshot, claim } => {
            let context = if claim || config.claim_context_default {
                SelectorContext::ClaimRewards
            } else {
                SelectorContext::General
            };
            run_tui(&mut config, snapshot, Some(context))
        }
    }
}

fn run_exchange(mode: ExchangeMode, currency: &str) {
    if !is_currency_supported(mode, currency) {
        println!("{currency} is not supported for {mode:?}");
        return;
    }
    let config = exchange_config();
    println!("{currency} is supported for {mode:?}");
    println!("Widget: {}", config.url);
    println!("Host: {}", config.host);
    println!("Partner id: {}", config.partner_id);
}

fn resolve_snapshot_path(config: &AppConfig, snapshot_path: Option<PathBuf>) -> Result<PathBuf> {
    snapshot_path
        .or_else(|| config.last_snapshot.clone())
        .ok_or_eyre("No snapshot file given and none opened before")
}

/// Prints the confirmation screen of a snapshot to stdout.
fn print_screen(config: &AppConfig, snapshot_path: Option<PathBuf>) -> Result<()> {
    let path = resolve_snapshot_path(config, snapshot_path)?;
    let snapshot = Snapshot::load(&path)?;
    let screen = ConfirmScreen::from_snapshot(&snapshot).map_err(StakeError::into_report)?;
    println!("{}", screen.plain_text());
    Ok(())
}

/// Loads the snapshot and runs the terminal UI until the user quits.
fn run_tui(
    config: &mut AppConfig,
    snapshot_path: Option<PathBuf>,
    selector: Option<SelectorContext>,
) -> Result<()> {
    let path = resolve_snapshot_path(config, snapshot_path)?;
    let snapshot = Snapshot::load(&path)?;

    config.last_snapshot = Some(path);
    if let Err(err) = config.save() {
        tracing::warn!("Could not save config: {err}");
    }

    let mut app = App::new(snapshot, config.clone());
    if let Some(context) = selector {
        app.update(Action::OpenSelector(context))?;
    }

    let mut terminal = tui::init()?;
    let result = run_app(&mut terminal, &mut app);
    tui::restore()?;
    result
}

/// Main application loop.
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.exit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if !crossterm::event::poll(TICK_RATE)? {
            continue;
        }
        let event = crossterm::event::read()?;
        if let Some(action) = handle_event(app, &event)
            && let Err(err) = app.update(action)
        {
            tracing::warn!("Action failed: {err}");
            app.update(Action::ShowMessage(format!("Error: {err}")))?;
        }
    }
    Ok(())
}
