//! `claimdesk-auth` — roles, user profile, and the client session lifecycle.
//!
//! This crate is intentionally decoupled from HTTP: it owns *who the caller
//! is* (profile + roles) and *whether they are signed in* (session store with
//! durable persistence), while the API client owns attaching the credential
//! to requests.

pub mod profile;
pub mod roles;
pub mod session;
pub mod storage;
pub mod token;

pub use profile::UserProfile;
pub use roles::Role;
pub use session::{Session, SessionSnapshot, SessionStore};
pub use storage::{FileStorage, InMemoryStorage, SessionStorage};
pub use token::AuthToken;
