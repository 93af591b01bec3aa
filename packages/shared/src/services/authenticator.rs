use async_trait::async_trait;
use std::sync::Arc;

use crate::repositories::credential_repository::CredentialRepository;
use crate::services::errors::authentication_errors::AuthenticationError;

#[cfg(test)]
use mockall::automock;

/// Decides whether a username/password pair may be issued a token.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str)
        -> Result<(), AuthenticationError>;
}

/// Checks the supplied password against the record held by a
/// [`CredentialRepository`].
pub struct CredentialAuthenticator {
    repository: Arc<dyn CredentialRepository>,
}

impl CredentialAuthenticator {
    pub fn new(repository: Arc<dyn CredentialRepository>) -> Self {
        CredentialAuthenticator { repository }
    }
}

#[async_trait]
impl Authenticator for CredentialAuthenticator {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(), AuthenticationError> {
        let record = self.repository.find_by_username(username).await?;

        // Disabled wins over a password mismatch.
        if !record.enabled {
            return Err(AuthenticationError::AccountDisabled);
        }
        if !record.password_matches(password) {
            return Err(AuthenticationError::InvalidCredentials);
        }
        Ok(())
    }
}
