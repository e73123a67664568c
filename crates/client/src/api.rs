//! Backend API seam.
//!
//! Views and flows depend on these traits instead of the concrete client,
//! so they can be exercised against an in-memory backend in tests.

use async_trait::async_trait;

use claimdesk_auth::{AuthToken, UserProfile};
use claimdesk_core::ClaimId;
use claimdesk_expenses::{ExpenseClaim, ExpenseStatus};

use crate::attachment::Attachment;
use crate::dto::{Credentials, LoginResponse, NewClaim, NewUser};
use crate::error::ApiResult;

/// The expense backend's surface, as this client consumes it.
#[async_trait]
pub trait ExpenseApi: Send + Sync {
    /// `POST /auth/register`
    async fn register(&self, new_user: &NewUser) -> ApiResult<UserProfile>;

    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse>;

    /// `GET /expenses/my`: the caller's own claims.
    async fn my_claims(&self) -> ApiResult<Vec<ExpenseClaim>>;

    /// `GET /expenses`: every claim (admin).
    async fn all_claims(&self) -> ApiResult<Vec<ExpenseClaim>>;

    /// `POST /expenses` (multipart): returns the created claim with its
    /// assigned id and initial PENDING status.
    async fn submit_claim(
        &self,
        claim: &NewClaim,
        attachment: Option<&Attachment>,
    ) -> ApiResult<ExpenseClaim>;

    /// `PUT /expenses/{id}/status`
    async fn update_status(&self, id: ClaimId, status: ExpenseStatus) -> ApiResult<()>;
}

/// Holder of the process-visible bearer credential.
///
/// Mutated only by login/logout/restore; after `set_bearer` every
/// authenticated request carries the token until `clear_bearer`.
pub trait BearerAuth {
    fn set_bearer(&mut self, token: AuthToken);
    fn clear_bearer(&mut self);
    fn has_bearer(&self) -> bool;
}
