//! CLI module for the registrant tool
//!
//! Provides subcommands for:
//! - `register`: run a registration through the staged builder and print the result
//! - `check`: validate the format of a single field value

pub mod check;
pub mod register;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Registrant - validated person registration
#[derive(Parser)]
#[command(name = "registrant")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register a person, optionally with an address
    Register(register::RegisterArgs),

    /// Check the format of a national ID, email or postal code
    Check(check::CheckArgs),
}

/// Load `.env` and layered configuration, then install logging
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    // Logging is not installed yet, so report load failures on stderr
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("warning: failed to load configuration, using defaults: {}", e);
        AppConfig::default()
    });
    logging::init_logging(&config.logging);

    config
}
