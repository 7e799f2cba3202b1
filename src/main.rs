// main.rs

//! # Lakebase Deploy - Main Entry Point
//!
//! Reads a Lakebase metadata YAML file and makes sure the project it
//! describes exists in the workspace, creating it when absent.
//!
//! ## Arguments
//!
//! - `--metadata <PATH>` - Lakebase metadata YAML file (required).
//! - `--log-level` - The logging level (default: `info`). Possible values: `error`, `warn`, `info`, `debug`, `trace`.
//! - `--env-file` - Dotenv file holding `DATABRICKS_HOST` / `DATABRICKS_TOKEN` (default: `.env`).
//!
//! ## Example Usage
//! ```bash
//! ./lakebase-deploy --metadata metadata/dev.yml
//! ./lakebase-deploy --metadata metadata/prod.yml --log-level debug --env-file prod.env
//! ```

mod app;
mod commands;
mod core;
mod error;
mod lakebase;
mod metadata;
mod utils;

use std::process;

use clap::Command;
use log::debug;

use crate::app::{APP_DESCRIPTION, APP_NAME, APP_VERSION};
use crate::commands::common_args::{args_from_matches, env_file, log_level, metadata};
use crate::error::error_chain;
use crate::utils::logging::initialize_logger;

/// Builds the command-line interface.
fn cli() -> Command {
    Command::new(APP_NAME)
        .version(APP_VERSION)
        .about(APP_DESCRIPTION)
        .arg(metadata())
        .arg(log_level())
        .arg(env_file())
}

/// Main function that initializes the CLI and runs the deployment.
fn main() {
    let matches = cli().get_matches();
    let args = args_from_matches(&matches);

    // ====================
    // Initialize Logger
    // ====================
    initialize_logger(&args.log_level);
    debug!("Logger initialized with level: {}", args.log_level);
    debug!("Metadata: {}", args.metadata);
    debug!("Environment File: {}", args.env_file);

    // ====================
    // Deployment
    // ====================
    if let Err(e) = commands::deploy::execute(&args) {
        print_error!("{}", error_chain(&e));
        process::exit(1);
    }
}
