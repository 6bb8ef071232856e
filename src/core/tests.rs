//! End-to-end tests of `AuthClient` over real HTTP against an in-process
//! axum stand-in for the user-management API.

use std::time::Duration;

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use crate::core::auth::{LoginRequest, Redirect, RegisterRequest};
use crate::core::config::ApiConfig;
use crate::core::error::FailureKind;
use crate::core::forms::{Field, LoginForm};
use crate::core::storage::MemoryStore;
use crate::core::AuthClient;

const SESSION_COOKIE: &str = "token=session-abc";

fn user_json() -> Value {
    json!({
        "_id": "64f0c2",
        "username": "ada",
        "email": "ada@example.com",
        "role": "student",
        "isVerified": true
    })
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.split(';').any(|pair| pair.trim() == SESSION_COOKIE))
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["email"] == "ada@example.com" && body["password"] == "Strong1!" {
        (
            StatusCode::OK,
            [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/; HttpOnly"))],
            Json(json!({ "success": true, "user": user_json(), "token": "jwt-abc" })),
        )
            .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "message": "Invalid credentials" })),
        )
            .into_response()
    }
}

async fn check_auth(headers: HeaderMap) -> Response {
    if has_session(&headers) {
        Json(json!({ "success": true, "user": user_json() })).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "message": "Not authenticated" })),
        )
            .into_response()
    }
}

async fn logout() -> Response {
    (
        StatusCode::OK,
        [(header::SET_COOKIE, "token=; Path=/; Max-Age=0".to_string())],
        Json(json!({ "success": true, "message": "Logged out successfully" })),
    )
        .into_response()
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["email"] == "taken@example.com" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "message": "User already exists" })),
        )
            .into_response();
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": { "_id": "64f0c3", "username": body["username"], "email": body["email"] }
        })),
    )
        .into_response()
}

async fn validate_reset_token(Path(token): Path<String>) -> Response {
    if token == "fresh-token" {
        Json(json!({ "message": "Token is valid" })).into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid or expired token" })),
        )
            .into_response()
    }
}

async fn verify_email(Path(_token): Path<String>) -> Response {
    Json(json!({ "success": true })).into_response()
}

async fn forgot_password() -> Response {
    (StatusCode::BAD_GATEWAY, "<html>upstream down</html>").into_response()
}

async fn resend_verification() -> Response {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({ "message": "Verification email sent" })).into_response()
}

fn api_router() -> Router {
    Router::new()
        .route("/api/user/login", post(login))
        .route("/api/user/check-auth", get(check_auth))
        .route("/api/user/logout", post(logout))
        .route("/api/user/register", post(register))
        .route("/api/user/validate-reset-token/{token}", get(validate_reset_token))
        .route("/api/user/verify-email/{token}", get(verify_email))
        .route("/api/user/forgot-password", post(forgot_password))
        .route("/api/user/resend-verification", post(resend_verification))
}

/// Serves the stand-in API on an ephemeral port and returns its base URL.
async fn spawn_api() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, api_router()).await.unwrap();
    });
    format!("http://{addr}")
}

async fn client() -> AuthClient {
    AuthClient::from_config(&ApiConfig::new(spawn_api().await)).unwrap()
}

fn credentials(password: &str) -> LoginRequest {
    LoginRequest {
        email: "ada@example.com".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_session_cookie_round_trip() {
    let client = client().await;

    assert!(client.bootstrap().await.is_none());
    assert!(!client.session().is_authenticated());

    let logged_in = client.login(&credentials("Strong1!")).await.unwrap();
    assert_eq!(logged_in.user.id, "64f0c2");
    assert_eq!(logged_in.user.extra["isVerified"], json!(true));

    // A fresh check now carries the cookie set by login.
    let user = client.bootstrap().await.unwrap();
    assert_eq!(user, logged_in.user);
    assert!(client.session().is_authenticated());
    assert!(!client.session().is_loading());

    assert_eq!(client.logout().await.unwrap(), Redirect::Home);
    assert!(client.session().user().is_none());

    // The server expired the cookie, so the next check is anonymous.
    assert!(client.bootstrap().await.is_none());
}

#[tokio::test]
async fn test_wrong_password_surfaces_server_message() {
    let client = client().await;

    let failure = client.login(&credentials("nope")).await.unwrap_err();

    assert_eq!(failure.message(), "Invalid credentials");
    assert_eq!(failure.status(), Some(401));
    assert!(client.session().user().is_none());
    assert_eq!(
        client.session().last_error().as_deref(),
        Some("Invalid credentials")
    );
}

#[tokio::test]
async fn test_register_reads_data_payload() {
    let client = client().await;
    let mut request = RegisterRequest {
        username: "grace".to_string(),
        email: "grace@example.com".to_string(),
        password: "Strong1!".to_string(),
        phone: "555 0100".to_string(),
        role: "student".to_string(),
    };

    let registered = client.register(&request).await.unwrap();
    assert_eq!(registered.redirect, Redirect::VerificationPending);
    assert_eq!(registered.user.unwrap().username, "grace");

    request.email = "taken@example.com".to_string();
    let failure = client.register(&request).await.unwrap_err();
    assert_eq!(failure.message(), "User already exists");
}

#[tokio::test]
async fn test_reset_token_validation() {
    let client = client().await;

    let notice = client.validate_reset_token("fresh-token").await.unwrap();
    assert_eq!(notice.message.as_deref(), Some("Token is valid"));

    let failure = client.validate_reset_token("expired-token").await.unwrap_err();
    assert_eq!(failure.message(), "Invalid or expired token");
    assert_eq!(failure.kind(), FailureKind::Rejected { status: 400 });
}

#[tokio::test]
async fn test_verify_email_redirects_to_login() {
    let client = client().await;

    let notice = client.verify_email("abc.def").await.unwrap();

    assert_eq!(notice.redirect, Some(Redirect::Login));
    assert_eq!(
        notice.message.as_deref(),
        Some("Your email has been successfully verified!")
    );
}

#[tokio::test]
async fn test_html_error_page_uses_fallback() {
    let client = client().await;

    let failure = client
        .request_password_reset("ada@example.com")
        .await
        .unwrap_err();

    assert_eq!(failure.message(), "Failed to send reset link");
    assert_eq!(failure.kind(), FailureKind::Unreadable { status: 502 });
}

#[tokio::test]
async fn test_configured_timeout_is_a_transport_failure() {
    let config = ApiConfig {
        request_timeout: Some(Duration::from_millis(200)),
        ..ApiConfig::new(spawn_api().await)
    };
    let client = AuthClient::from_config(&config).unwrap();

    let failure = client
        .resend_verification_email("ada@example.com")
        .await
        .unwrap_err();

    assert_eq!(failure.kind(), FailureKind::Transport);
    assert!(!client.session().is_loading());
}

#[tokio::test]
async fn test_unreachable_api_never_authenticates() {
    // Bind and drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = AuthClient::from_config(&ApiConfig::new(format!("http://{addr}"))).unwrap();

    assert!(client.bootstrap().await.is_none());
    assert!(!client.session().is_loading());

    let failure = client.login(&credentials("Strong1!")).await.unwrap_err();
    assert_eq!(failure.kind(), FailureKind::Transport);
    assert!(!failure.message().is_empty());
}

#[tokio::test]
async fn test_login_form_over_http() {
    let client = client().await;
    let store = MemoryStore::new();

    let empty = LoginForm {
        email: "ada@example.com".to_string(),
        ..LoginForm::default()
    };
    let err = empty.submit(&client, &store).await.unwrap_err();
    assert_eq!(
        err.field_errors().unwrap().get(Field::Password),
        "Password is required"
    );

    let form = LoginForm {
        email: "ada@example.com".to_string(),
        password: "Strong1!".to_string(),
        remember_me: true,
    };
    let logged_in = form.submit(&client, &store).await.unwrap();
    assert_eq!(logged_in.redirect, Redirect::Home);
    assert_eq!(LoginForm::restore(&store).email, "ada@example.com");
}
