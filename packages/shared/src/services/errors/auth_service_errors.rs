use crate::repositories::errors::credential_repository_errors::CredentialRepositoryError;
use crate::services::errors::authentication_errors::AuthenticationError;
use crate::services::errors::token_service_errors::TokenServiceError;
use std::fmt;

#[derive(Debug)]
pub enum AuthServiceError {
    Authentication(AuthenticationError),
    Repository(CredentialRepositoryError),
    Token(TokenServiceError),
}

impl fmt::Display for AuthServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthServiceError::Authentication(err) => write!(f, "Authentication failed: {}", err),
            AuthServiceError::Repository(err) => write!(f, "Repository error: {}", err),
            AuthServiceError::Token(err) => write!(f, "Token error: {}", err),
        }
    }
}

impl std::error::Error for AuthServiceError {}

impl From<AuthenticationError> for AuthServiceError {
    fn from(err: AuthenticationError) -> Self {
        AuthServiceError::Authentication(err)
    }
}

impl From<CredentialRepositoryError> for AuthServiceError {
    fn from(err: CredentialRepositoryError) -> Self {
        AuthServiceError::Repository(err)
    }
}

impl From<TokenServiceError> for AuthServiceError {
    fn from(err: TokenServiceError) -> Self {
        AuthServiceError::Token(err)
    }
}
