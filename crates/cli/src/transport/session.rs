// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session boundary: where the bearer token comes from and what happens
//! when the backend rejects it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use super::http::TransportFuture;

/// Environment variable that supplies a token without a session file.
pub const TOKEN_ENV: &str = crate::env::vars::NEXTVISA_TOKEN;

/// Error type for session lookups.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session store could not be read or written.
    #[error("session store error: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of the current bearer token.
pub trait SessionProvider: Send + Sync {
    /// Returns the token for the next request, or `None` when signed out.
    fn current_token(&self) -> TransportFuture<'_, Result<Option<String>, SessionError>>;

    /// Ends the session. Must be safe to call when already signed out.
    fn terminate(&self) -> TransportFuture<'_, ()>;
}

/// Sends the operator to the sign-in surface.
pub trait Navigator: Send + Sync {
    fn redirect_to_login(&self);
}

/// Token stored in a file inside the console home.
///
/// A token from [`TOKEN_ENV`] takes precedence over the file. Terminating
/// the session removes the file and stops using the environment token for
/// the rest of the process.
pub struct FileSession {
    path: PathBuf,
    env_token: Option<String>,
    terminated: AtomicBool,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSession {
            path: path.into(),
            env_token: None,
            terminated: AtomicBool::new(false),
        }
    }

    /// Create a session that also honours [`TOKEN_ENV`].
    pub fn from_env(path: impl Into<PathBuf>) -> Self {
        FileSession {
            env_token: crate::env::token(),
            ..FileSession::new(path)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a token obtained from the authentication provider.
    pub fn store(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, format!("{}\n", token.trim()))?;
        restrict_permissions(&self.path)?;
        self.terminated.store(false, Ordering::SeqCst);
        Ok(())
    }

    /// Remove the stored token. Returns true if a token was removed.
    pub fn clear(&self) -> Result<bool, SessionError> {
        self.terminated.store(true, Ordering::SeqCst);
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionProvider for FileSession {
    fn current_token(&self) -> TransportFuture<'_, Result<Option<String>, SessionError>> {
        Box::pin(async move {
            if self.terminated.load(Ordering::SeqCst) {
                return Ok(None);
            }
            if let Some(token) = &self.env_token {
                return Ok(Some(token.clone()));
            }
            match tokio::fs::read_to_string(&self.path).await {
                Ok(contents) => {
                    let token = contents.trim();
                    Ok((!token.is_empty()).then(|| token.to_string()))
                }
                // Signed out between lookups.
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
    }

    fn terminate(&self) -> TransportFuture<'_, ()> {
        Box::pin(async move {
            if let Err(e) = self.clear() {
                tracing::warn!("failed to remove session file {}: {}", self.path.display(), e);
            }
        })
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Navigator for the terminal: tells the operator how to sign back in.
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn redirect_to_login(&self) {
        eprintln!("Signed out: the session has expired.");
        eprintln!("  hint: sign in again with 'nextvisa login --token <token>'");
    }
}
