//! Request/response bodies for the backend endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use claimdesk_auth::{AuthToken, Role, UserProfile};
use claimdesk_core::Amount;

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<Role>,
}

impl NewUser {
    /// A self-service registration: always the default USER role.
    pub fn with_default_role(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            roles: vec![Role::User],
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/login`: the profile fields plus the issued
/// bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub token: AuthToken,
}

/// Fields of a claim submission. Sent as multipart form text, not JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClaim {
    pub expense_name: String,
    pub price: Amount,
    pub date: NaiveDate,
}

/// Body of `PUT /expenses/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct StatusUpdate {
    pub status: claimdesk_expenses::ExpenseStatus,
}

/// Error body the backend attaches to rejected requests.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
