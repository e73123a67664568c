//! In-memory backend double shared by the flow tests.

// Not every test file uses every helper.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use claimdesk_auth::{AuthToken, Role, UserProfile};
use claimdesk_client::{
    ApiError, ApiResult, Attachment, BearerAuth, Credentials, ExpenseApi, LoginResponse, NewClaim,
    NewUser,
};
use claimdesk_core::{ClaimId, UserId};
use claimdesk_expenses::{ClaimOwner, ExpenseClaim, ExpenseStatus};

/// Canned responses plus a record of every mutating call.
#[derive(Debug, Default)]
pub struct MockState {
    pub login: Option<ApiResult<LoginResponse>>,
    pub register: Option<ApiResult<UserProfile>>,
    pub my_claims: Option<ApiResult<Vec<ExpenseClaim>>>,
    pub all_claims: Option<ApiResult<Vec<ExpenseClaim>>>,
    pub submit: Option<ApiResult<ExpenseClaim>>,
    pub update_status: Option<ApiResult<()>>,
    pub submitted: Vec<(NewClaim, bool)>,
    pub status_updates: Vec<(ClaimId, ExpenseStatus)>,
}

/// Backend double: every endpoint answers with its configured response, or
/// a network error when none was set.
#[derive(Debug, Default)]
pub struct MockApi {
    pub state: Mutex<MockState>,
    bearer: Option<AuthToken>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bearer(&self) -> Option<&AuthToken> {
        self.bearer.as_ref()
    }

    pub fn respond_login(&self, response: ApiResult<LoginResponse>) {
        self.state.lock().unwrap().login = Some(response);
    }

    pub fn respond_register(&self, response: ApiResult<UserProfile>) {
        self.state.lock().unwrap().register = Some(response);
    }

    pub fn respond_my_claims(&self, response: ApiResult<Vec<ExpenseClaim>>) {
        self.state.lock().unwrap().my_claims = Some(response);
    }

    pub fn respond_all_claims(&self, response: ApiResult<Vec<ExpenseClaim>>) {
        self.state.lock().unwrap().all_claims = Some(response);
    }

    pub fn respond_submit(&self, response: ApiResult<ExpenseClaim>) {
        self.state.lock().unwrap().submit = Some(response);
    }

    pub fn respond_update_status(&self, response: ApiResult<()>) {
        self.state.lock().unwrap().update_status = Some(response);
    }

    pub fn status_updates(&self) -> Vec<(ClaimId, ExpenseStatus)> {
        self.state.lock().unwrap().status_updates.clone()
    }

    pub fn submitted(&self) -> Vec<(NewClaim, bool)> {
        self.state.lock().unwrap().submitted.clone()
    }

    fn unconfigured<T>() -> ApiResult<T> {
        Err(ApiError::Network("no mock response configured".to_string()))
    }
}

#[async_trait]
impl ExpenseApi for MockApi {
    async fn register(&self, _new_user: &NewUser) -> ApiResult<UserProfile> {
        self.state
            .lock()
            .unwrap()
            .register
            .clone()
            .unwrap_or_else(Self::unconfigured)
    }

    async fn login(&self, _credentials: &Credentials) -> ApiResult<LoginResponse> {
        self.state
            .lock()
            .unwrap()
            .login
            .clone()
            .unwrap_or_else(Self::unconfigured)
    }

    async fn my_claims(&self) -> ApiResult<Vec<ExpenseClaim>> {
        self.state
            .lock()
            .unwrap()
            .my_claims
            .clone()
            .unwrap_or_else(Self::unconfigured)
    }

    async fn all_claims(&self) -> ApiResult<Vec<ExpenseClaim>> {
        self.state
            .lock()
            .unwrap()
            .all_claims
            .clone()
            .unwrap_or_else(Self::unconfigured)
    }

    async fn submit_claim(
        &self,
        claim: &NewClaim,
        attachment: Option<&Attachment>,
    ) -> ApiResult<ExpenseClaim> {
        let mut state = self.state.lock().unwrap();
        state.submitted.push((claim.clone(), attachment.is_some()));
        state.submit.clone().unwrap_or_else(Self::unconfigured)
    }

    async fn update_status(&self, id: ClaimId, status: ExpenseStatus) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state.status_updates.push((id, status));
        state.update_status.clone().unwrap_or_else(Self::unconfigured)
    }
}

impl BearerAuth for MockApi {
    fn set_bearer(&mut self, token: AuthToken) {
        self.bearer = Some(token);
    }

    fn clear_bearer(&mut self) {
        self.bearer = None;
    }

    fn has_bearer(&self) -> bool {
        self.bearer.is_some()
    }
}

// ─── fixtures ────────────────────────────────────────────────────────────

pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_714_550_400 + secs, 0).unwrap()
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

pub fn profile(id: i64, name: &str, roles: Vec<Role>) -> UserProfile {
    UserProfile {
        id: UserId::new(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        roles,
    }
}

pub fn claim(id: i64, name: &str, owner: &str, amount: &str, status: ExpenseStatus) -> ExpenseClaim {
    ExpenseClaim {
        id: ClaimId::new(id),
        expense_name: name.to_string(),
        price: amount.parse().unwrap(),
        date: today(),
        status,
        proof_image_path: None,
        owner: Some(ClaimOwner {
            id: UserId::new(100 + id),
            name: owner.to_string(),
        }),
    }
}

pub fn rejection(status: u16, message: &str) -> ApiError {
    ApiError::Status {
        status,
        message: Some(message.to_string()),
    }
}
