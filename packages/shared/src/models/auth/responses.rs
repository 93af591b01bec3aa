use serde::{Deserialize, Serialize};

/// Body returned by `POST /authenticate`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TokenClaims {
    pub sub: String, // canonical username
    pub iat: i64,    // issued at
    pub exp: i64,    // expiration time
    pub jti: String, // unique per issuance
}
