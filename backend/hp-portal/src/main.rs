//! hp-portal - healthcare portal console
//!
//! Reads user actions from stdin, one per line, and prints the view the
//! portal decides to show for each.
//!
//! # Examples
//!
//! ```bash
//! printf 'go /doctors\nlogin patient demo@example.com\nbook 2\ntake booking\n' | hp-portal
//! ```

mod cli;

use crate::cli::Cli;

use hp_portal::{Console, Portal, logger};

use std::error::Error;
use std::io;

use clap::Parser;
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => hp_config::Config::config_dir()?,
    };
    let mut config = hp_config::Config::load_from(&config_dir)?;
    if let Some(level) = cli.log_level.as_deref() {
        config.logging.level = hp_config::LogLevel::parse_lenient(level);
    }
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path(&config_dir),
        config.logging.colored,
    )?;

    info!("Starting hp-portal v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let portal = Portal::from_config(&config)?;
    let mut console = Console::new(portal);

    let stdin = io::stdin();
    console.run(stdin.lock(), io::stdout())?;

    info!("hp-portal exiting");
    Ok(())
}
