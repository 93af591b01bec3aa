use std::sync::Arc;

use shared::repositories::credential_repository::{
    CredentialRepository, FixedCredentialRepository,
};
use shared::services::auth_service::AuthService;
use shared::services::authenticator::CredentialAuthenticator;
use shared::services::token_service::TokenIssuer;

use crate::config::ApiConfig;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        AppState { auth_service }
    }

    /// Wires the fixed credential store, its authenticator and a token
    /// issuer keyed with the configured secret.
    pub fn from_config(config: &ApiConfig) -> Self {
        let repository: Arc<dyn CredentialRepository> =
            Arc::new(FixedCredentialRepository::default());
        let authenticator = Arc::new(CredentialAuthenticator::new(repository.clone()));
        let token_issuer = Arc::new(TokenIssuer::new(&config.jwt_secret, config.token_validity));

        AppState::new(Arc::new(AuthService::new(
            authenticator,
            repository,
            token_issuer,
        )))
    }
}
