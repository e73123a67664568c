//! `reqwest`-backed implementation of the backend API.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use claimdesk_auth::{AuthToken, UserProfile};
use claimdesk_core::ClaimId;
use claimdesk_expenses::{ExpenseClaim, ExpenseStatus};

use crate::api::{BearerAuth, ExpenseApi};
use crate::attachment::Attachment;
use crate::config::ApiConfig;
use crate::dto::{Credentials, ErrorBody, LoginResponse, NewClaim, NewUser, StatusUpdate};
use crate::error::{ApiError, ApiResult};

/// HTTP client for the expense backend.
///
/// Holds the bearer credential for the whole client process; the embedding
/// application attaches it on login/restore and detaches it on logout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    bearer: Option<AuthToken>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            bearer: None,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// URL a receipt attachment can be viewed at.
    pub fn receipt_url(&self, proof_image_path: &str) -> String {
        self.config
            .endpoint(&format!("/expenses/files/{proof_image_path}"))
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, self.config.endpoint(path));
        if let Some(token) = &self.bearer {
            req = req.bearer_auth(token.as_str());
        }
        req
    }

    /// Resolve a response, converting non-2xx statuses into [`ApiError`]
    /// with the backend's message when its error body carries one.
    async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn expect_json<T: DeserializeOwned>(req: reqwest::RequestBuilder) -> ApiResult<T> {
        let response = req.send().await.map_err(ApiError::from_reqwest)?;
        Self::check(response)
            .await?
            .json()
            .await
            .map_err(ApiError::from_reqwest)
    }

    async fn expect_ok(req: reqwest::RequestBuilder) -> ApiResult<()> {
        let response = req.send().await.map_err(ApiError::from_reqwest)?;
        Self::check(response).await?;
        Ok(())
    }

    fn claim_form(claim: &NewClaim, attachment: Option<&Attachment>) -> ApiResult<Form> {
        let mut form = Form::new()
            .text("expenseName", claim.expense_name.clone())
            .text("price", claim.price.to_string())
            .text("date", claim.date.format("%Y-%m-%d").to_string());

        if let Some(attachment) = attachment {
            let part = Part::bytes(attachment.data.clone())
                .file_name(attachment.file_name.clone())
                .mime_str(&attachment.content_type)
                .map_err(|err| {
                    ApiError::Decode(format!("invalid attachment content type: {err}"))
                })?;
            form = form.part("proofImage", part);
        }

        Ok(form)
    }
}

impl BearerAuth for ApiClient {
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

#[async_trait]
impl ExpenseApi for ApiClient {
    async fn register(&self, new_user: &NewUser) -> ApiResult<UserProfile> {
        let req = self
            .request(reqwest::Method::POST, "/auth/register")
            .json(new_user);
        Self::expect_json(req).await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let req = self
            .request(reqwest::Method::POST, "/auth/login")
            .json(credentials);
        Self::expect_json(req).await
    }

    async fn my_claims(&self) -> ApiResult<Vec<ExpenseClaim>> {
        Self::expect_json(self.request(reqwest::Method::GET, "/expenses/my")).await
    }

    async fn all_claims(&self) -> ApiResult<Vec<ExpenseClaim>> {
        Self::expect_json(self.request(reqwest::Method::GET, "/expenses")).await
    }

    async fn submit_claim(
        &self,
        claim: &NewClaim,
        attachment: Option<&Attachment>,
    ) -> ApiResult<ExpenseClaim> {
        let form = Self::claim_form(claim, attachment)?;
        let req = self
            .request(reqwest::Method::POST, "/expenses")
            .multipart(form);
        Self::expect_json(req).await
    }

    async fn update_status(&self, id: ClaimId, status: ExpenseStatus) -> ApiResult<()> {
        let req = self
            .request(reqwest::Method::PUT, &format!("/expenses/{id}/status"))
            .json(&StatusUpdate { status });
        Self::expect_ok(req).await
    }
}
