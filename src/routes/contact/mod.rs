//! src/routes/contact

mod get;
mod post;

pub use get::*;
pub use post::*;

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

use crate::domain::{FieldViolation, ValidationErrors};
use crate::utils::error_helpers::error_chain_fmt;

#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a [FieldViolation]>,
}

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    ValidationError(#[from] ValidationErrors),

    #[error("Failed to submit contact form")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmitError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmitError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SubmitError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let details = match self {
            SubmitError::ValidationError(errors) => Some(errors.violations()),
            SubmitError::UnexpectedError(_) => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
            details,
        })
    }
}

#[derive(thiserror::Error)]
pub enum ListError {
    #[error("Failed to fetch contacts")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ListError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
            details: None,
        })
    }
}

/// Turns an unreadable JSON body into the same 400 shape as a field
/// violation, reported against the pseudo-field `body`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::info!(error.message = %err, "Rejected unreadable contact form body");
    let errors = ValidationErrors::from(vec![FieldViolation::new("body", err.to_string())]);
    SubmitError::ValidationError(errors).into()
}
