use serde::{Deserialize, Serialize};

use claimdesk_core::UserId;

use crate::Role;

/// User profile as returned by the backend on registration and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl UserProfile {
    /// Whether the role set contains ADMIN.
    ///
    /// Always a set-containment check; the position of ADMIN in the role
    /// list carries no meaning.
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }
}
