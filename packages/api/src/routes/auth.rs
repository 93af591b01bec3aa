use axum::{extract::State, routing::post, Json, Router};
use tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::auth::requests::AuthenticationRequest;
use shared::models::auth::responses::TokenResponse;

pub fn routes() -> Router<AppState> {
    Router::new().route("/authenticate", post(authenticate))
}

async fn authenticate(
    State(state): State<AppState>,
    Json(request): Json<AuthenticationRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let response = state
        .auth_service
        .create_authentication_token(&request)
        .await
        .map_err(|e| {
            error!("Failed to authenticate user {}: {}", request.username, e);
            ApiError::from(e)
        })?;

    debug!("User authenticated successfully: {}", request.username);
    Ok(Json(response))
}
