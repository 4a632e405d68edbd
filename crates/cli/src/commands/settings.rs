// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Automation settings held by the backend (`/configuration`).

use std::io::Write;
use std::sync::Arc;

use nv_core::{Configuration, ConfigurationUpdate};
use serde_json::Value;

use crate::cli::{OutputFormat, SettingsCommand};
use crate::display::{format_configuration, mask_secret};
use crate::error::Result;
use crate::sync::ConsoleStore;

use super::{loaded, write_json};

pub async fn run(
    store: &ConsoleStore,
    cmd: SettingsCommand,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let config = match cmd {
        SettingsCommand::Show => loaded(store.configuration().await)?,
        SettingsCommand::Set { field, value } => {
            let current = loaded(store.configuration().await)?;
            let mut update = ConfigurationUpdate::from(&*current);
            update.set(&field, &value)?;
            update.validate()?;
            Arc::new(store.update_configuration(current.id, &update).await?)
        }
    };
    match output {
        OutputFormat::Json => write_json(out, &masked(&config)?),
        OutputFormat::Text => {
            writeln!(out, "{}", format_configuration(&config))?;
            Ok(())
        }
    }
}

/// JSON form with the push token hidden.
fn masked(config: &Configuration) -> Result<Value> {
    let mut value = serde_json::to_value(config)?;
    if let Some(token) = value.get_mut("push_token") {
        *token = Value::from(mask_secret(&config.push_token));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
