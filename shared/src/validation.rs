use crate::models::CreatePollRequest;

pub const MIN_OPTIONS: usize = 1;
pub const MAX_OPTIONS: usize = 100;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Too few options (minimum {MIN_OPTIONS})")]
    TooFewOptions,
    #[error("Too many options (maximum {MAX_OPTIONS})")]
    TooManyOptions,
}

pub fn validate_poll_request(request: &CreatePollRequest) -> Result<(), ValidationError> {
    if request.options.len() < MIN_OPTIONS { return Err(ValidationError::TooFewOptions); }
    if request.options.len() > MAX_OPTIONS { return Err(ValidationError::TooManyOptions); }
    Ok(())
}
