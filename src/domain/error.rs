use axum::extract::rejection::JsonRejection;
use color_eyre::eyre::Report;
use thiserror::Error;

use super::ProjectId;

#[derive(Debug, Error)]
pub enum AuthAPIError {
    #[error("Invalid email or password")]
    IncorrectCredentials,
    #[error("Storage error")]
    StorageError(#[source] Report),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

impl From<JsonRejection> for AuthAPIError {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(rejection.into())
    }
}

impl From<JsonRejection> for ProjectAPIError {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationError(rejection.into())
    }
}

#[derive(Debug, Error)]
pub enum ProjectAPIError {
    #[error("Project not found: {0}")]
    IDNotFoundError(ProjectId),
    #[error("Storage error")]
    StorageError(#[source] Report),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("User not found")]
    UserNotFound,
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

#[derive(Debug, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection.body_text())
    }
}
