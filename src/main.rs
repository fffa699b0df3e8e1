//! Kofi - A Mattermost bot reporting team work-logs.
//!
//! This is the main entry point for the Kofi bot, which bridges Mattermost
//! messaging with an internal work-log service.
//!
//! # Overview
//!
//! Team members mention the bot with a command and get back the hours logged
//! on a project over a period, per member and per project:
//!
//! ```text
//! @mr_kofi Log summary core last-week
//! @mr_kofi Log detail core 01-10-2026~07-10-2026
//! @mr_kofi help
//! ```
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings, see the [`config`] module
//! for the expected format. Any value can be overridden with an environment
//! variable using the `KOFI_` prefix:
//!
//! ```bash
//! export KOFI_MATTERMOST__PASSWORD="secret-from-env"
//! kofi --config config.yaml
//! ```
//!
//! # Logging
//!
//! The log level defaults to `info` and is set with `RUST_LOG`.

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod bot;
mod commands;
mod config;
mod mattermost;
mod worklog;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Environment variables prefixed by `KOFI_` override the file values.
    #[arg(short, long)]
    config: String,
}

#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting kofi {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };

    let bot = match Bot::new(config).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {:#}", e);
            return;
        }
    };
    bot.start().await;
}
