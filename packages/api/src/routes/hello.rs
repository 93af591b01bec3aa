use axum::{routing::get, Router};

use crate::{middleware::auth::AuthenticatedUser, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/hello", get(hello))
}

async fn hello(user: AuthenticatedUser) -> String {
    format!("Hello {}", user.username)
}
