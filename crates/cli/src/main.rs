// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use nvrs::Cli;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never mix with command output.
fn setup_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "nvrs=debug,warn",
        _ => "nvrs=trace,debug",
    };
    let filter = nvrs::env::log_filter()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    if let Err(e) = nvrs::run(cli).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
