//! fichajes library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
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
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::Clock { .. } => cli::commands::clock::handle(&cli.command, cfg),
        Commands::Employee { command } => cli::commands::employee::handle(command, cfg),
        Commands::Event { command } => cli::commands::event::handle(command, cfg),
        Commands::Schedule { command } => cli::commands::schedule::handle(command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; command-line overrides win over the file
    let mut cfg = Config::load();
    if let Some(url) = &cli.api_url {
        cfg.api_url = url.clone();
    }
    if let Some(token) = &cli.token {
        cfg.token = Some(token.clone());
    }

    dispatch(&cli, &cfg)
}
