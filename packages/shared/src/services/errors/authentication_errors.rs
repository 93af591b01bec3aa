use crate::repositories::errors::credential_repository_errors::CredentialRepositoryError;
use std::fmt;

#[derive(Debug)]
pub enum AuthenticationError {
    AccountDisabled,
    InvalidCredentials,
    Repository(CredentialRepositoryError),
}

impl AuthenticationError {
    /// Reason string reported to the caller.
    pub fn reason(&self) -> &'static str {
        match self {
            AuthenticationError::AccountDisabled => "USER_DISABLED",
            AuthenticationError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthenticationError::Repository(_) => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthenticationError::AccountDisabled => write!(f, "Account is disabled"),
            AuthenticationError::InvalidCredentials => write!(f, "Invalid username or password"),
            AuthenticationError::Repository(err) => write!(f, "Credential lookup failed: {}", err),
        }
    }
}

impl std::error::Error for AuthenticationError {}

impl From<CredentialRepositoryError> for AuthenticationError {
    fn from(err: CredentialRepositoryError) -> Self {
        match err {
            CredentialRepositoryError::NotFound => AuthenticationError::InvalidCredentials,
            other => AuthenticationError::Repository(other),
        }
    }
}
