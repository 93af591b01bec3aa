use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use tower::ServiceExt;

use api::{create_app, ApiConfig, AppState};
use shared::models::auth::responses::TokenClaims;
use shared::models::credential::CredentialRecord;
use shared::repositories::credential_repository::{
    CredentialRepository, FixedCredentialRepository,
};
use shared::services::auth_service::AuthService;
use shared::services::authenticator::CredentialAuthenticator;
use shared::services::token_service::TokenIssuer;

const SECRET: &str = "integration-test-secret";

fn test_app() -> Router {
    let config = ApiConfig::from_lookup(|key| match key {
        "JWT_SECRET" => Some(SECRET.to_string()),
        _ => None,
    })
    .unwrap();
    create_app(AppState::from_config(&config))
}

fn app_with_record(record: CredentialRecord) -> Router {
    let repository: Arc<dyn CredentialRepository> =
        Arc::new(FixedCredentialRepository::new(record));
    let auth_service = AuthService::new(
        Arc::new(CredentialAuthenticator::new(repository.clone())),
        repository,
        Arc::new(TokenIssuer::with_default_validity(SECRET)),
    );
    create_app(AppState::new(Arc::new(auth_service)))
}

async fn post_authenticate(app: Router, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/authenticate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn get_hello(app: Router, authorization: Option<&str>) -> Response {
    let mut request = Request::builder().method("GET").uri("/hello");
    if let Some(value) = authorization {
        request = request.header(header::AUTHORIZATION, value);
    }
    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

async fn issue_token(app: Router) -> String {
    let response =
        post_authenticate(app, json!({ "username": "admin", "password": "admin" })).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_valid_credentials_return_token() {
    let response = post_authenticate(
        test_app(),
        json!({ "username": "admin", "password": "admin" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let token = body["token"].as_str().expect("token should be a string");
    assert!(!token.is_empty());
    assert_eq!(body.as_object().unwrap().len(), 1, "only the token field is returned");
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let response = post_authenticate(
        test_app(),
        json!({ "username": "admin", "password": "wrong" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "INVALID_CREDENTIALS" })
    );
}

#[tokio::test]
async fn test_disabled_account_is_forbidden() {
    let app = app_with_record(CredentialRecord::default().disabled());
    let response = post_authenticate(app, json!({ "username": "admin", "password": "admin" })).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await, json!({ "error": "USER_DISABLED" }));
}

#[tokio::test]
async fn test_unknown_username_with_fixed_password_succeeds() {
    let app = test_app();
    let response = post_authenticate(
        app.clone(),
        json!({ "username": "nobody", "password": "admin" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let token = body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string();
    let hello = get_hello(app, Some(&format!("Bearer {}", token))).await;
    assert_eq!(hello.status(), StatusCode::OK);
    assert_eq!(body_bytes(hello).await, b"Hello admin");
}

#[tokio::test]
async fn test_unknown_username_with_other_password_fails() {
    let response = post_authenticate(
        test_app(),
        json!({ "username": "nobody", "password": "anything" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_repeated_authentication_yields_distinct_tokens() {
    let app = test_app();

    let first = issue_token(app.clone()).await;
    let second = issue_token(app).await;

    assert_ne!(first, second);
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let response = post_authenticate(test_app(), json!({ "username": "admin" })).await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_hello_with_valid_token() {
    let app = test_app();
    let token = issue_token(app.clone()).await;

    let response = get_hello(app, Some(&format!("Bearer {}", token))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"Hello admin");
}

#[tokio::test]
async fn test_hello_without_token_is_unauthorized() {
    let response = get_hello(test_app(), None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "error": "INVALID_TOKEN" }));
}

#[tokio::test]
async fn test_hello_rejects_non_bearer_scheme() {
    let app = test_app();
    let token = issue_token(app.clone()).await;

    let response = get_hello(app, Some(&format!("Basic {}", token))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_hello_rejects_token_from_other_key() {
    let foreign = TokenIssuer::with_default_validity("some-other-secret")
        .generate_token("admin")
        .unwrap();

    let response = get_hello(test_app(), Some(&format!("Bearer {}", foreign))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "error": "INVALID_TOKEN" }));
}

#[tokio::test]
async fn test_hello_reports_expired_token() {
    let issued_at = Utc::now() - Duration::hours(10);
    let claims = TokenClaims {
        sub: "admin".to_string(),
        iat: issued_at.timestamp(),
        exp: (issued_at + Duration::hours(5)).timestamp(),
        jti: "expired".to_string(),
    };
    let token = encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let response = get_hello(test_app(), Some(&format!("Bearer {}", token))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "error": "EXPIRED_TOKEN" }));
}

#[tokio::test]
async fn test_health_check() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"Healthy!");
}

#[tokio::test]
async fn test_authenticate_preflight_allows_any_origin() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/authenticate")
                .header(header::ORIGIN, "https://client.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_cross_origin_authenticate_carries_allow_origin() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/authenticate")
                .header(header::ORIGIN, "https://client.example.com")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "username": "admin", "password": "admin" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
