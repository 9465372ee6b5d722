//! End-to-end tests over the in-memory repository

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::middleware::from_fn_with_state;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tower::ServiceExt;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::infra::memory::InMemoryUserRepository;
use crate::presentation::middleware::{
    AuthGate, CurrentUser, RoleGate, require_auth, require_role,
};
use crate::presentation::router::auth_router;

const SIGNUP: &str = r#"{"name":"John Doe","email":"john@example.com","password":"SecurePass123!","dob":"1990-01-01"}"#;
const LOGIN: &str = r#"{"email":"john@example.com","password":"SecurePass123!"}"#;

struct TestApp {
    router: Router,
    tokens: Arc<TokenService>,
}

fn test_app() -> TestApp {
    let config = Arc::new(AuthConfig {
        bcrypt_cost: 4,
        ..AuthConfig::with_random_secret()
    });
    let tokens = Arc::new(TokenService::new(&config.token));
    let gate = AuthGate::new(tokens.clone());

    let protected = Router::new()
        .route(
            "/me",
            get(|CurrentUser(principal): CurrentUser| async move {
                Json(serde_json::json!({
                    "user_id": principal.user_id,
                    "role": principal.role,
                }))
            }),
        )
        .layer(from_fn_with_state(gate.clone(), require_auth));

    let admin = Router::new()
        .route("/stats", get(|| async { "ok" }))
        .layer(from_fn_with_state(RoleGate::admin_only(), require_role))
        .layer(from_fn_with_state(gate, require_auth));

    let router = Router::new()
        .nest(
            "/auth",
            auth_router(InMemoryUserRepository::new(), tokens.clone(), config),
        )
        .nest("/users", protected)
        .nest("/admin", admin);

    TestApp { router, tokens }
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_with(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(app: &TestApp, req: Request<Body>) -> Response {
    app.router.clone().oneshot(req).await.unwrap()
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn signup_and_login(app: &TestApp) -> String {
    let response = send(app, post("/auth/signup", SIGNUP)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let response = send(app, post("/auth/login", LOGIN)).await;
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_signup_login_and_protected_access() {
    let app = test_app();

    let response = send(&app, post("/auth/signup", SIGNUP)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["name"], "John Doe");
    assert_eq!(created["email"], "john@example.com");
    assert_eq!(created["role"], "user");

    let response = send(&app, post("/auth/signup", SIGNUP)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = send(&app, post("/auth/login", LOGIN)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_some());
    let login = json_body(response).await;
    assert_eq!(login["user"]["id"], created["id"]);
    let token = login["token"].as_str().unwrap();

    let claims = app.tokens.verify(token).unwrap();
    assert_eq!(claims.role, UserRole::User);

    let response = send(&app, get_with("/users/me", Some(&format!("Bearer {token}")))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let me = json_body(response).await;
    assert_eq!(me["user_id"], created["id"]);
    assert_eq!(me["role"], "user");
}

#[tokio::test]
async fn test_login_rejections_are_indistinguishable() {
    let app = test_app();
    send(&app, post("/auth/signup", SIGNUP)).await;

    let wrong_password = send(
        &app,
        post("/auth/login", r#"{"email":"john@example.com","password":"WrongPass123!"}"#),
    )
    .await;
    let unknown_email = send(
        &app,
        post("/auth/login", r#"{"email":"nobody@example.com","password":"SecurePass123!"}"#),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(wrong_password).await, json_body(unknown_email).await);
}

#[tokio::test]
async fn test_email_is_case_insensitive() {
    let app = test_app();
    send(&app, post("/auth/signup", SIGNUP)).await;

    let response = send(
        &app,
        post("/auth/login", r#"{"email":"  John@Example.COM ","password":"SecurePass123!"}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_signup_validation() {
    let app = test_app();

    let weak = r#"{"name":"John Doe","email":"john@example.com","password":"password","dob":"1990-01-01"}"#;
    let response = send(&app, post("/auth/signup", weak)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "WEAK_PASSWORD");

    let bad_dob = r#"{"name":"John Doe","email":"john@example.com","password":"SecurePass123!","dob":"01/01/1990"}"#;
    let response = send(&app, post("/auth/signup", bad_dob)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], "VALIDATION_FAILED");

    // nothing was stored, so the valid signup still succeeds
    let response = send(&app, post("/auth/signup", SIGNUP)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_auth_gate_rejections_share_one_body() {
    let app = test_app();
    let token = signup_and_login(&app).await;

    let missing = send(&app, get_with("/users/me", None)).await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    let expected = json_body(missing).await;
    assert_eq!(expected["code"], "UNAUTHORIZED");

    let tampered = format!("Bearer {token}x");
    let two_tokens = format!("Bearer {token} extra");
    for value in [
        "Bearer",
        "Basic dXNlcjpwYXNz",
        "Bearer not-a-token",
        tampered.as_str(),
        two_tokens.as_str(),
    ] {
        let response = send(&app, get_with("/users/me", Some(value))).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "header {value:?}");
        assert_eq!(json_body(response).await, expected, "header {value:?}");
    }

    let response = send(&app, get_with("/users/me", Some(&format!("bearer {token}")))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = test_app();
    let issued = chrono::Utc::now() - chrono::Duration::days(2);
    let token = app
        .tokens
        .issue_at(UserId::new(1), UserRole::User, issued)
        .unwrap();

    let response = send(&app, get_with("/users/me", Some(&format!("Bearer {token}")))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_role_gate() {
    let app = test_app();
    let token = signup_and_login(&app).await;

    let response = send(&app, get_with("/admin/stats", Some(&format!("Bearer {token}")))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(response).await["code"], "INSUFFICIENT_PERMISSIONS");

    let response = send(&app, get_with("/admin/stats", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let admin = app.tokens.issue(UserId::new(99), UserRole::Admin).unwrap();
    let response = send(&app, get_with("/admin/stats", Some(&format!("Bearer {admin}")))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_role_gate_without_auth_gate_is_unauthenticated() {
    let router = Router::new()
        .route("/", get(|| async { "ok" }))
        .layer(from_fn_with_state(RoleGate::admin_only(), require_role));

    let response = router.oneshot(get_with("/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
