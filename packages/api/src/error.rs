use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shared::services::errors::{
    auth_service_errors::AuthServiceError, authentication_errors::AuthenticationError,
    token_service_errors::TokenServiceError,
};

#[derive(Debug)]
pub enum ApiError {
    AuthService(AuthServiceError),
    Token(TokenServiceError),
    Unauthorized,
}

impl From<AuthServiceError> for ApiError {
    fn from(error: AuthServiceError) -> Self {
        ApiError::AuthService(error)
    }
}

impl From<TokenServiceError> for ApiError {
    fn from(error: TokenServiceError) -> Self {
        ApiError::Token(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, reason) = match self {
            ApiError::AuthService(AuthServiceError::Authentication(
                err @ AuthenticationError::AccountDisabled,
            )) => (StatusCode::FORBIDDEN, err.reason()),
            ApiError::AuthService(AuthServiceError::Authentication(
                err @ AuthenticationError::InvalidCredentials,
            )) => (StatusCode::UNAUTHORIZED, err.reason()),
            ApiError::AuthService(
                AuthServiceError::Authentication(AuthenticationError::Repository(_))
                | AuthServiceError::Repository(_)
                | AuthServiceError::Token(_),
            ) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),

            ApiError::Token(TokenServiceError::ExpiredToken) => {
                (StatusCode::UNAUTHORIZED, "EXPIRED_TOKEN")
            }
            ApiError::Token(TokenServiceError::InvalidToken) | ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "INVALID_TOKEN")
            }
            ApiError::Token(TokenServiceError::Encoding(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        (status, Json(json!({ "error": reason }))).into_response()
    }
}
