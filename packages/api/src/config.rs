use chrono::Duration;
use shared::services::token_service::DEFAULT_TOKEN_VALIDITY_SECONDS;
use std::fmt;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const MAX_TOKEN_VALIDITY_SECONDS: i64 = 366 * 24 * 60 * 60;

/// Startup configuration, read once from the environment.
#[derive(Clone)]
pub struct ApiConfig {
    pub jwt_secret: String,
    pub token_validity: Duration,
    pub bind_address: String,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} environment variable must be set", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "{} has an invalid value: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let validity_seconds = match lookup("JWT_VALIDITY_SECONDS") {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(seconds) if seconds > 0 && seconds <= MAX_TOKEN_VALIDITY_SECONDS => seconds,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "JWT_VALIDITY_SECONDS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_TOKEN_VALIDITY_SECONDS,
        };

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(ApiConfig {
            jwt_secret,
            token_validity: Duration::seconds(validity_seconds),
            bind_address,
        })
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_validity", &self.token_validity)
            .field("bind_address", &self.bind_address)
            .finish()
    }
}
