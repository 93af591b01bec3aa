use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::models::auth::responses::TokenClaims;
use crate::services::errors::token_service_errors::TokenServiceError;

pub const DEFAULT_TOKEN_VALIDITY_SECONDS: i64 = 5 * 60 * 60;

const ALGORITHM: Algorithm = Algorithm::HS512;

/// Signs and verifies HS512 tokens with a key fixed at construction.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validity: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, validity: Duration) -> Self {
        TokenIssuer {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validity,
        }
    }

    pub fn with_default_validity(secret: &str) -> Self {
        Self::new(secret, Duration::seconds(DEFAULT_TOKEN_VALIDITY_SECONDS))
    }

    pub fn generate_token(&self, subject: &str) -> Result<String, TokenServiceError> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(self.validity).ok_or_else(|| {
            TokenServiceError::Encoding("token expiry is out of range".to_string())
        })?;
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenServiceError::Encoding(format!("{:#?}", e)))
    }

    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenServiceError> {
        let validation = Validation::new(ALGORITHM);

        match decode::<TokenClaims>(token, &self.decoding_key, &validation) {
            Ok(token_data) => Ok(token_data.claims),
            Err(err) => match err.kind() {
                ErrorKind::ExpiredSignature => Err(TokenServiceError::ExpiredToken),
                _ => Err(TokenServiceError::InvalidToken),
            },
        }
    }
}
