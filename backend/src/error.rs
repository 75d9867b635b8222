use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::{self, Json};
use shared::{ErrorResponse, PollError, ValidationError};
use thiserror::Error;
use tracing::{debug, error, warn};
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Poll already exists")]
    Conflict,
    #[error("Poll not found")]
    NotFound,
    #[error("Poll closed")]
    PollClosed,
    #[error("Invalid option")]
    InvalidOption,
    #[error("{0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Conflict => Status::Conflict,
            ApiError::NotFound => Status::NotFound,
            ApiError::PollClosed => Status::BadRequest,
            ApiError::InvalidOption => Status::BadRequest,
            ApiError::BadRequest(_) => Status::BadRequest,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }
}

impl From<PollError> for ApiError {
    fn from(err: PollError) -> Self {
        debug!("Poll operation rejected for {}: {}", err.subject(), err);
        match err {
            PollError::Conflict(_) => ApiError::Conflict,
            PollError::NotFound(_) => ApiError::NotFound,
            PollError::PollClosed(_) => ApiError::PollClosed,
            PollError::InvalidOption(_) => ApiError::InvalidOption,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Poll(e) => e.into(),
            StoreError::LockFailed => ApiError::Internal(StoreError::LockFailed.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<json::Error<'_>> for ApiError {
    fn from(err: json::Error<'_>) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", err))
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        let message = match &self {
            ApiError::Internal(detail) => {
                error!("Internal error on {}: {}", req.uri(), detail);
                "An internal server error occurred.".to_string()
            }
            other => {
                warn!("{} {} rejected: {}", req.method(), req.uri(), other);
                other.to_string()
            }
        };

        rocket::Response::build_from(Json(ErrorResponse::new(message)).respond_to(req)?)
            .status(status)
            .ok()
    }
}
