use std::sync::Arc;
use tracing::debug;

use crate::models::auth::requests::AuthenticationRequest;
use crate::models::auth::responses::{TokenClaims, TokenResponse};
use crate::repositories::credential_repository::CredentialRepository;
use crate::services::authenticator::Authenticator;
use crate::services::errors::auth_service_errors::AuthServiceError;
use crate::services::errors::token_service_errors::TokenServiceError;
use crate::services::token_service::TokenIssuer;

/// Turns a username/password pair into a signed token.
pub struct AuthService {
    authenticator: Arc<dyn Authenticator>,
    repository: Arc<dyn CredentialRepository>,
    token_issuer: Arc<TokenIssuer>,
}

impl AuthService {
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        repository: Arc<dyn CredentialRepository>,
        token_issuer: Arc<TokenIssuer>,
    ) -> Self {
        AuthService {
            authenticator,
            repository,
            token_issuer,
        }
    }

    pub async fn create_authentication_token(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<TokenResponse, AuthServiceError> {
        self.authenticator
            .authenticate(&request.username, &request.password)
            .await?;

        // The subject comes from the stored record, not from the request.
        let record = self.repository.find_by_username(&request.username).await?;
        let token = self.token_issuer.generate_token(&record.username)?;

        debug!("Issued token for {}", record.username);
        Ok(TokenResponse { token })
    }

    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenServiceError> {
        self.token_issuer.verify_token(token)
    }
}
