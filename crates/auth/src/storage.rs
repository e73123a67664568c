//! Durable client-side session storage.
//!
//! All operations are best-effort: a missing, unreadable, or malformed
//! payload degrades to "no session" rather than an error, so a corrupt file
//! can never lock a user out of the login view.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::session::Session;

/// Persistence seam for the session store.
pub trait SessionStorage {
    /// Read the persisted session, if any. Malformed state reads as `None`.
    fn load(&self) -> Option<Session>;

    /// Persist the session (overwriting any previous one).
    fn store(&mut self, session: &Session);

    /// Remove any persisted session.
    fn clear(&mut self);
}

/// Storage backed by process memory only. Used in tests and by embedders
/// that do not want sessions to survive a restart.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    slot: Option<Session>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a session, as if a previous run had persisted it.
    pub fn with_session(session: Session) -> Self {
        Self { slot: Some(session) }
    }
}

impl SessionStorage for InMemoryStorage {
    fn load(&self) -> Option<Session> {
        self.slot.clone()
    }

    fn store(&mut self, session: &Session) {
        self.slot = Some(session.clone());
    }

    fn clear(&mut self) {
        self.slot = None;
    }
}

/// Storage backed by a JSON file in the OS application-data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the default session file:
    /// `{app_data_dir}/claimdesk/session.json`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let base = dirs::data_dir()
            .or_else(|| {
                dirs::home_dir().map(|mut h| {
                    h.push(".local");
                    h.push("share");
                    h
                })
            })
            .context("failed to resolve OS app data directory")?;

        let mut path = base;
        path.push("claimdesk");
        path.push("session.json");
        Ok(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_store(&self, session: &Session) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create session directory at {parent:?}"))?;
        }
        let payload =
            serde_json::to_string(session).context("failed to serialize session")?;
        std::fs::write(&self.path, payload)
            .with_context(|| format!("failed to write session file at {:?}", self.path))?;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Option<Session> {
        let payload = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&payload) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!("ignoring malformed session file: {err}");
                None
            }
        }
    }

    fn store(&mut self, session: &Session) {
        if let Err(err) = self.try_store(session) {
            tracing::warn!("failed to persist session: {err:?}");
        }
    }

    fn clear(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!("failed to remove session file: {err}"),
        }
    }
}
