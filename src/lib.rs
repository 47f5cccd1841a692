//! mapty library root.
//! Exposes the workout model, the tracker controller with its collaborator
//! contracts, the storage layer and the CLI.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List => cli::commands::list::handle(cfg),
        Commands::Select { .. } => cli::commands::select::handle(&cli.command, cfg),
        Commands::Map => cli::commands::map::handle(cfg),
        Commands::Session => cli::commands::session::handle(cfg),
        Commands::Reset => cli::commands::reset::handle(cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
///
/// One tracker is built per command invocation; nothing is shared between
/// invocations except the database.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    utils::logging::init_logging(cli.verbose, cli.quiet);

    // configuration is loaded once
    let mut cfg = Config::load()?;

    // command-line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }
    if let Some(position) = cli.position {
        cfg.home_position = Some(position);
    }

    dispatch(&cli, &cfg)
}
