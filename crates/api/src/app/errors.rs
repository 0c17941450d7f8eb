use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use userstore_core::DomainError;

use crate::app::dto::{fallback_response, json_response, ApiResponse};

pub const INVALID_BODY_MESSAGE: &str = "Please provide firstName lastName and bio for the user";
pub const USER_NOT_FOUND_MESSAGE: &str = "The user with the specified ID does not exist";
pub const INTERNAL_MESSAGE: &str = "something went wrong";

/// Failures a handler reports to the client.
///
/// Malformed and unknown ids both become [`ApiError::UserNotFound`]; the
/// client cannot tell them apart.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("user not found")]
    UserNotFound,

    /// The response could not be produced; the client only sees a fixed 500.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> &'static str {
        match self {
            ApiError::InvalidBody(_) => INVALID_BODY_MESSAGE,
            ApiError::UserNotFound => USER_NOT_FOUND_MESSAGE,
            ApiError::Internal(_) => INTERNAL_MESSAGE,
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

// A path segment that is not even valid UTF-8 is still just an unknown id.
impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::UserNotFound
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidId(_) | DomainError::NotFound => ApiError::UserNotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(_) = self {
            return fallback_response();
        }
        tracing::debug!(error = %self, "request rejected");
        json_response(self.status(), &ApiResponse::message(self.client_message()))
    }
}
