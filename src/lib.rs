//! shiftgrid library root.
//! Exposes the schedule engine (core), its inputs (source, models),
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Roster { .. } => cli::commands::roster::handle(&cli.command, cfg),
        Commands::Templates { .. } => cli::commands::templates::handle(&cli.command, cfg),
        Commands::Convert { .. } => cli::commands::convert::handle(&cli.command, cfg),
    }
}

/// Logging goes to stderr; filter from SHIFTGRID_LOG, else warn (debug with -v).
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "shiftgrid=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SHIFTGRID_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    // a second init (tests calling run() twice) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides of the configured paths
    if let Some(data) = &cli.data {
        cfg.data_dir = data.clone();
    }
    if let Some(overrides) = &cli.overrides {
        cfg.overrides_file = Some(overrides.clone());
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
