//! Client session lifecycle: restore, login, logout.

use serde::{Deserialize, Serialize};

use crate::storage::SessionStorage;
use crate::{AuthToken, UserProfile};

/// An authenticated session: who the caller is plus their bearer credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub profile: UserProfile,
    pub token: AuthToken,
}

/// Immutable view of the store consumed by the route guard.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// True until `restore` has run; protected views must not render yet.
    pub loading: bool,
    pub authenticated: bool,
    /// Set-containment check over the role list.
    pub admin: bool,
}

/// Owner of the current session.
///
/// The store is the only component that mutates session state. It starts in
/// the `loading` state; `restore` must be called once at startup before any
/// navigation decision is made.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Option<Session>,
    loading: bool,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: None,
            loading: true,
        }
    }

    /// Re-establish a persisted session, if one exists.
    ///
    /// There is no error path: missing or malformed persisted state degrades
    /// silently to "unauthenticated". Always clears the `loading` flag.
    pub fn restore(&mut self) {
        if let Some(session) = self.storage.load() {
            tracing::info!(user = %session.profile.name, "session restored");
            self.session = Some(session);
        }
        self.loading = false;
    }

    /// Establish a new session and persist it.
    pub fn login(&mut self, profile: UserProfile, token: AuthToken) {
        let session = Session { profile, token };
        self.storage.store(&session);
        tracing::info!(user = %session.profile.name, "logged in");
        self.session = Some(session);
        self.loading = false;
    }

    /// Drop the session and remove the persisted copy.
    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            tracing::info!("logged out");
        }
        self.storage.clear();
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.session.as_ref().map(|s| &s.profile)
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.session.as_ref().map(|s| &s.token)
    }

    /// Access the underlying storage (mainly for inspection in tests).
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            loading: self.loading,
            authenticated: self.session.is_some(),
            admin: self
                .session
                .as_ref()
                .is_some_and(|s| s.profile.is_admin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStorage;
    use crate::Role;
    use claimdesk_core::UserId;

    fn profile(roles: Vec<Role>) -> UserProfile {
        UserProfile {
            id: UserId::new(9),
            name: "Carol".to_string(),
            email: "carol@example.com".to_string(),
            roles,
        }
    }

    #[test]
    fn starts_loading_and_unauthenticated() {
        let store = SessionStore::new(InMemoryStorage::new());
        let snapshot = store.snapshot();
        assert!(snapshot.loading);
        assert!(!snapshot.authenticated);
    }

    #[test]
    fn restore_without_persisted_state_degrades_silently() {
        let mut store = SessionStore::new(InMemoryStorage::new());
        store.restore();

        let snapshot = store.snapshot();
        assert!(!snapshot.loading);
        assert!(!snapshot.authenticated);
    }

    #[test]
    fn restore_re_establishes_a_persisted_session() {
        let session = Session {
            profile: profile(vec![Role::User, Role::Admin]),
            token: AuthToken::new("t"),
        };
        let mut store = SessionStore::new(InMemoryStorage::with_session(session.clone()));
        store.restore();

        assert_eq!(store.session(), Some(&session));
        let snapshot = store.snapshot();
        assert!(!snapshot.loading);
        assert!(snapshot.authenticated);
        assert!(snapshot.admin);
    }

    #[test]
    fn login_persists_and_logout_clears() {
        let mut store = SessionStore::new(InMemoryStorage::new());
        store.restore();
        store.login(profile(vec![Role::User]), AuthToken::new("t"));

        assert!(store.is_authenticated());
        assert!(!store.snapshot().admin);
        assert!(store.storage().load().is_some());

        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.storage().load().is_none());
    }
}
