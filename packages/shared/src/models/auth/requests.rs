use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthenticationRequest {
    pub username: String,
    pub password: String,
}
