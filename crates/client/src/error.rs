use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a backend call.
///
/// `Status` carries the backend's `{"message": ...}` body when one was
/// present, so business-rule rejections can be surfaced verbatim to the
/// user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request failed with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// The server-provided rejection message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Notice text: the server's message when available, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
