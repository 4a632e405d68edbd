// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! nvrs - data layer and command-line console for the nextvisa backend.
//!
//! # Main Components
//!
//! - [`transport`] - HTTP transport with the auth middleware chain
//! - [`api`] - Stateless clients for applicants, re-schedules and settings
//! - [`sync`] - Entity cache: keyed reads, de-duplicated fetches, retries,
//!   invalidation after writes, subscriptions
//! - [`config`] - Local console configuration (`config.toml`)
//!
//! # Wiring
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use nvrs::api::Api;
//! use nvrs::sync::{ConsoleStore, QueryCache, StoreSettings};
//! use nvrs::transport::{ApiClient, FileSession, ReqwestTransport, TerminalNavigator};
//!
//! let transport = ReqwestTransport::new("http://localhost:8000", None)?;
//! let session = Arc::new(FileSession::from_env("/tmp/nextvisa/session"));
//! let client = ApiClient::with_session(Arc::new(transport), session, Arc::new(TerminalNavigator));
//! let store = ConsoleStore::new(Api::new(client), QueryCache::new(), StoreSettings::default());
//! let applicants = store.applicants(Default::default()).await.into_result()?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;

pub mod api;
pub mod config;
pub mod env;
pub mod error;
pub mod sync;
pub mod transport;

pub use cli::{
    ApplicantCommand, Cli, Command, ConsoleConfigCommand, OutputFormat, RescheduleCommand,
    SettingsCommand,
};
pub use config::Config;
pub use error::{Error, Result};

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::CommandFactory;
use clap_complete::generate;

use api::Api;
use commands::watch::{WatchEnd, WatchOptions};
use sync::{ConsoleStore, QueryCache};
use transport::{ApiClient, FileSession, ReqwestTransport, TerminalNavigator};

/// Load configuration, applying the API URL override chain:
/// `--api-url`, then `NEXTVISA_API_URL`, then the configuration file.
fn load_config(home: &Path, api_url: Option<String>) -> Result<Config> {
    Ok(Config::load(home)?.with_api_url_override(api_url.or_else(env::api_url)))
}

/// Build the store for commands that talk to the backend.
fn connect(api_url: Option<String>) -> Result<(ConsoleStore, Config)> {
    let home = config::console_home()?;
    let config = load_config(&home, api_url)?;
    let transport = ReqwestTransport::new(&config.api_url, config.request_timeout())?;
    let session = FileSession::from_env(config::session_path(&home));
    let client = ApiClient::with_session(
        Arc::new(transport),
        Arc::new(session),
        Arc::new(TerminalNavigator),
    );
    let store = ConsoleStore::new(Api::new(client), QueryCache::new(), config.store_settings());
    Ok((store, config))
}

fn stored_session() -> Result<FileSession> {
    Ok(FileSession::new(config::session_path(&config::console_home()?)))
}

/// Execute a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        output,
        api_url,
        command,
        ..
    } = cli;
    let mut stdout = std::io::stdout();

    match command {
        Command::Statuses => commands::statuses::run(output, &mut stdout),
        Command::Completion { shell } => {
            generate(shell, &mut Cli::command(), "nextvisa", &mut stdout);
            Ok(())
        }
        Command::ConsoleConfig(cmd) => {
            commands::console_config::run(&config::console_home()?, cmd, output, &mut stdout)
        }
        Command::Login { token } => commands::session::login(&stored_session()?, &token, &mut stdout),
        Command::Logout => commands::session::logout(&stored_session()?, &mut stdout),
        Command::Applicant(cmd) => {
            let (store, _) = connect(api_url)?;
            commands::applicant::run(&store, cmd, output, &mut stdout).await
        }
        Command::Reschedule(cmd) => {
            let (store, _) = connect(api_url)?;
            commands::reschedule::run(&store, cmd, output, &mut stdout).await
        }
        Command::Settings(cmd) => {
            let (store, _) = connect(api_url)?;
            commands::settings::run(&store, cmd, output, &mut stdout).await
        }
        Command::Watch {
            applicant,
            interval,
            limit,
        } => {
            let (store, config) = connect(api_url)?;
            let options = WatchOptions {
                applicant,
                interval: interval
                    .map(Duration::from_secs)
                    .unwrap_or_else(|| config.watch_interval()),
                limit,
            };
            let shutdown = async {
                let _ = tokio::signal::ctrl_c().await;
            };
            let end = commands::watch::run(&store, options, output, &mut stdout, shutdown).await?;
            if end == WatchEnd::Interrupted {
                tracing::debug!("watch of applicant {} interrupted", applicant);
            }
            Ok(())
        }
    }
}
