// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `login` and `logout`: manage the stored bearer token.

use std::io::Write;

use crate::error::{Error, Result};
use crate::transport::FileSession;

pub fn login(session: &FileSession, token: &str, out: &mut impl Write) -> Result<()> {
    if token.trim().is_empty() {
        return Err(Error::EmptyToken);
    }
    session.store(token)?;
    writeln!(out, "Signed in. Token stored in {}", session.path().display())?;
    if crate::env::token().is_some() {
        writeln!(
            out,
            "  note: {} is set and takes precedence over the stored token",
            crate::transport::TOKEN_ENV
        )?;
    }
    Ok(())
}

pub fn logout(session: &FileSession, out: &mut impl Write) -> Result<()> {
    if session.clear()? {
        writeln!(out, "Signed out.")?;
    } else {
        writeln!(out, "Not signed in.")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
