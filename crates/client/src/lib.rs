//! `claimdesk-client` — typed REST client for the expense backend.
//!
//! Thin shell over `reqwest`: bearer-credential handling, JSON endpoints,
//! multipart claim submission. The [`ExpenseApi`] trait is the seam views
//! and tests depend on; [`ApiClient`] is the production implementation.

pub mod api;
pub mod attachment;
pub mod client;
pub mod config;
pub mod dto;
pub mod error;

pub use api::{BearerAuth, ExpenseApi};
pub use attachment::Attachment;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use dto::{Credentials, LoginResponse, NewClaim, NewUser};
pub use error::{ApiError, ApiResult};
