// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `console-config`: the local configuration file.

use std::io::Write;
use std::path::Path;

use crate::cli::{ConsoleConfigCommand, OutputFormat};
use crate::config::{config_path, Config};
use crate::error::{Error, Result};

use super::write_json;

pub fn run(
    home: &Path,
    cmd: ConsoleConfigCommand,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match cmd {
        ConsoleConfigCommand::Show => {
            let config = Config::load(home)?.with_api_url_override(crate::env::api_url());
            match output {
                OutputFormat::Json => write_json(out, &config),
                OutputFormat::Text => {
                    let text = toml::to_string_pretty(&config)
                        .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
                    write!(out, "{text}")?;
                    Ok(())
                }
            }
        }
        ConsoleConfigCommand::Path => {
            writeln!(out, "{}", config_path(home).display())?;
            Ok(())
        }
        ConsoleConfigCommand::Set { key, value } => {
            let mut config = Config::load(home)?;
            config.set(&key, &value)?;
            config.save(home)?;
            writeln!(out, "Set {key} in {}", config_path(home).display())?;
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "console_config_tests.rs"]
mod tests;
