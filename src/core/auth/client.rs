//! Auth client: one request/response round trip per operation.
//!
//! Every operation follows the same contract: send the request with
//! credentials, parse the body whatever the status, and return either a
//! normalized success or an `AuthFailure` with a non-empty message. Nothing
//! here panics on a malformed response. Session mutations happen strictly
//! after the response has been interpreted.

use std::sync::Arc;

use serde::Serialize;

use crate::core::auth::endpoints::{Endpoint, is_path_safe_token};
use crate::core::auth::types::{
    EmailRequest, LoggedIn, LoginRequest, Notice, Redirect, RegisterRequest, Registered,
    ResetPasswordRequest,
};
use crate::core::error::{AuthFailure, FailureKind};
use crate::core::http::{ApiRequest, HttpTransport, Method};
use crate::core::response::{Payload, interpret};
use crate::core::session::{SessionStore, UserSummary};

pub type AuthResult<T> = Result<T, AuthFailure>;

/// Default message shown after a successful email verification.
pub const EMAIL_VERIFIED_MESSAGE: &str = "Your email has been successfully verified!";

/// Runs auth operations against the remote API and owns session mutation.
#[derive(Clone)]
pub struct AuthClient {
    transport: Arc<dyn HttpTransport>,
    session: SessionStore,
}

impl AuthClient {
    /// Creates a client with a fresh session store.
    pub fn new(transport: impl HttpTransport + 'static) -> Self {
        Self::with_session(Arc::new(transport), SessionStore::new())
    }

    /// Creates a client around an existing transport and session store.
    pub fn with_session(transport: Arc<dyn HttpTransport>, session: SessionStore) -> Self {
        Self { transport, session }
    }

    /// Native client using `reqwest` with a cookie store.
    #[cfg(feature = "ssr")]
    pub fn from_config(
        config: &crate::core::config::ApiConfig,
    ) -> Result<Self, crate::core::error::TransportError> {
        Ok(Self::new(crate::core::http::ReqwestTransport::new(config)?))
    }

    /// Browser client using `fetch` with credentials included.
    #[cfg(feature = "hydrate")]
    pub fn browser(config: &crate::core::config::ApiConfig) -> Self {
        Self::new(crate::core::http::BrowserTransport::new(config))
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Asks the API whether the session cookie is still valid.
    ///
    /// Never fails: any error means "not authenticated". Only the most
    /// recent check may update the session, and only if no login or logout
    /// happened while it was in flight. Returns the resulting user.
    pub async fn bootstrap(&self) -> Option<UserSummary> {
        let ticket = self.session.begin_bootstrap();
        let endpoint = Endpoint::CheckAuth;

        let user = match self.transport.send(request(&endpoint, None)).await {
            Ok(response) if response.is_success() => {
                let payload = Payload::parse(&response.body);
                if payload.success_flag() == Some(true) {
                    payload.user()
                } else {
                    None
                }
            }
            Ok(response) => {
                tracing::debug!("Auth check rejected with status {}", response.status);
                None
            }
            Err(err) => {
                tracing::warn!("Failed to check authentication status: {}", err);
                None
            }
        };

        self.session.finish_bootstrap(ticket, user);
        self.session.user()
    }

    /// Registers a new account and sends the user to the verification page.
    pub async fn register(&self, request: &RegisterRequest) -> AuthResult<Registered> {
        self.begin_operation();
        let result = self.try_register(request).await;
        self.finish_operation(result)
    }

    /// Logs in and stores the returned user in the session.
    pub async fn login(&self, request: &LoginRequest) -> AuthResult<LoggedIn> {
        self.begin_operation();
        let result = self.try_login(request).await;
        self.finish_operation(result)
    }

    async fn try_register(&self, request: &RegisterRequest) -> AuthResult<Registered> {
        let payload = self.call(Endpoint::Register, Some(to_body(request)?)).await?;
        let user = payload.user();
        if let Some(user) = &user {
            self.session.set_user(user.clone());
        }
        tracing::info!("Registration accepted");

        Ok(Registered {
            user,
            token: payload.token(),
            redirect: Redirect::VerificationPending,
        })
    }

    async fn try_login(&self, request: &LoginRequest) -> AuthResult<LoggedIn> {
        let endpoint = Endpoint::Login;
        let payload = self.call(endpoint, Some(to_body(request)?)).await?;
        let user = payload.user().ok_or_else(|| {
            AuthFailure::new(
                FailureKind::Unreadable {
                    status: payload.status(),
                },
                None,
                endpoint.fallback_message(),
            )
        })?;

        self.session.set_user(user.clone());
        tracing::info!("User {} logged in", user.id);

        Ok(LoggedIn {
            user,
            token: payload.token(),
            redirect: Redirect::Home,
        })
    }

    /// Ends the session on the server. The local session is cleared whatever
    /// the outcome.
    pub async fn logout(&self) -> AuthResult<Redirect> {
        self.begin_operation();
        let result = self.call(Endpoint::Logout, None).await.map(|_| Redirect::Home);
        self.session.clear_user();
        if let Err(failure) = &result {
            tracing::warn!("Logout request failed: {}", failure);
        }
        self.finish_operation(result)
    }

    pub async fn request_password_reset(&self, email: &str) -> AuthResult<Notice> {
        self.begin_operation();
        let result = self
            .message_call(Endpoint::ForgotPassword, Some(to_body(&EmailRequest { email })))
            .await;
        self.finish_operation(result)
    }

    pub async fn reset_password(&self, token: &str, password: &str) -> AuthResult<Notice> {
        self.begin_operation();
        let body = to_body(&ResetPasswordRequest { token, password });
        let result = self.message_call(Endpoint::ResetPassword, Some(body)).await;
        self.finish_operation(result)
    }

    /// Checks a reset token before the reset form is shown.
    pub async fn validate_reset_token(&self, token: &str) -> AuthResult<Notice> {
        self.begin_operation();
        let endpoint = Endpoint::ValidateResetToken(token);
        let result = match check_path_token(&endpoint, token) {
            Ok(()) => self.message_call(endpoint, None).await,
            Err(failure) => Err(failure),
        };
        self.finish_operation(result)
    }

    pub async fn resend_verification_email(&self, email: &str) -> AuthResult<Notice> {
        self.begin_operation();
        let result = self
            .message_call(Endpoint::ResendVerification, Some(to_body(&EmailRequest { email })))
            .await;
        self.finish_operation(result)
    }

    /// Confirms an email address; on success the caller should move to login.
    pub async fn verify_email(&self, token: &str) -> AuthResult<Notice> {
        self.begin_operation();
        let endpoint = Endpoint::VerifyEmail(token);
        let result = match check_path_token(&endpoint, token) {
            Ok(()) => self.message_call(endpoint, None).await.map(|notice| Notice {
                message: Some(
                    notice
                        .message
                        .unwrap_or_else(|| EMAIL_VERIFIED_MESSAGE.to_string()),
                ),
                redirect: Some(Redirect::Login),
            }),
            Err(failure) => Err(failure),
        };
        self.finish_operation(result)
    }

    async fn message_call(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<AuthResult<serde_json::Value>>,
    ) -> AuthResult<Notice> {
        let body = body.transpose()?;
        let payload = self.call(endpoint, body).await?;
        Ok(Notice {
            message: payload.message().map(str::to_string),
            redirect: None,
        })
    }

    async fn call(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<serde_json::Value>,
    ) -> AuthResult<Payload> {
        tracing::debug!("{} {}", endpoint.method(), endpoint.redacted_path());

        let response = self
            .transport
            .send(request(&endpoint, body))
            .await
            .map_err(|err| AuthFailure::transport(&err))?;

        interpret(&response, endpoint.fallback_message())
    }

    fn begin_operation(&self) {
        self.session.begin_operation();
        self.session.set_error(None);
    }

    fn finish_operation<T>(&self, result: AuthResult<T>) -> AuthResult<T> {
        self.session.finish_operation();
        if let Err(failure) = &result {
            self.session.set_error(Some(failure.message().to_string()));
        }
        result
    }
}

fn request(endpoint: &Endpoint<'_>, body: Option<serde_json::Value>) -> ApiRequest {
    match endpoint.method() {
        Method::Get => ApiRequest::get(endpoint.path()),
        Method::Post => ApiRequest::post(endpoint.path(), body),
    }
}

fn to_body<T: Serialize>(value: &T) -> AuthResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|err| {
        tracing::error!("Failed to encode request: {}", err);
        AuthFailure::new(FailureKind::Invalid, None, crate::core::error::UNEXPECTED_ERROR)
    })
}

fn check_path_token(endpoint: &Endpoint<'_>, token: &str) -> AuthResult<()> {
    if is_path_safe_token(token) {
        Ok(())
    } else {
        Err(AuthFailure::invalid(endpoint.fallback_message()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::error::{TransportError, UNEXPECTED_ERROR};
    use crate::core::testing::ScriptedTransport;

    fn client_with(transport: ScriptedTransport) -> (AuthClient, Arc<ScriptedTransport>) {
        let transport = Arc::new(transport);
        let client = AuthClient::with_session(transport.clone(), SessionStore::new());
        (client, transport)
    }

    fn login_request() -> LoginRequest {
        LoginRequest {
            email: "ada@example.com".to_string(),
            password: "Strong1!".to_string(),
        }
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "Strong1!".to_string(),
            phone: "+1 555-0100".to_string(),
            role: "student".to_string(),
        }
    }

    const USER_BODY: &str =
        r#"{"success":true,"user":{"id":"u1","username":"ada","email":"ada@example.com","role":"student"},"token":"jwt"}"#;

    #[tokio::test]
    async fn test_bootstrap_sets_user_on_success() {
        let (client, transport) = client_with(ScriptedTransport::new().reply(200, USER_BODY));

        let user = client.bootstrap().await;

        assert_eq!(user.unwrap().username, "ada");
        assert!(!client.session().is_loading());
        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].path, "/api/user/check-auth");
    }

    #[tokio::test]
    async fn test_bootstrap_absorbs_every_failure() {
        let cases = [
            ScriptedTransport::new().fail(TransportError::Network("down".into())),
            ScriptedTransport::new().reply(401, r#"{"message":"Not authenticated"}"#),
            ScriptedTransport::new().reply(200, r#"{"success":false}"#),
            ScriptedTransport::new().reply(200, r#"{"success":true}"#),
            ScriptedTransport::new().reply(200, ""),
            ScriptedTransport::new().reply(500, "<html>oops</html>"),
        ];

        for transport in cases {
            let (client, _) = client_with(transport);
            client.session().set_user(UserSummary {
                id: "stale".to_string(),
                ..UserSummary::default()
            });

            assert!(client.bootstrap().await.is_none());
            assert!(client.session().user().is_none());
            assert!(!client.session().is_loading());
        }
    }

    #[tokio::test]
    async fn test_login_success_sets_session_user() {
        let (client, transport) = client_with(ScriptedTransport::new().reply(200, USER_BODY));

        let logged_in = client.login(&login_request()).await.unwrap();

        assert_eq!(logged_in.redirect, Redirect::Home);
        assert_eq!(logged_in.token.as_deref(), Some("jwt"));
        assert_eq!(client.session().user(), Some(logged_in.user.clone()));
        assert_eq!(logged_in.user.email, "ada@example.com");
        assert!(client.session().last_error().is_none());

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/api/user/login");
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["password"], "Strong1!");
    }

    #[tokio::test]
    async fn test_login_failure_surfaces_server_message_and_keeps_session() {
        let (client, _) = client_with(
            ScriptedTransport::new().reply(401, r#"{"success":false,"message":"Invalid credentials"}"#),
        );

        let failure = client.login(&login_request()).await.unwrap_err();

        assert_eq!(failure.message(), "Invalid credentials");
        assert_eq!(failure.kind(), FailureKind::Rejected { status: 401 });
        assert!(client.session().user().is_none());
        assert_eq!(
            client.session().last_error().as_deref(),
            Some("Invalid credentials")
        );
        assert!(!client.session().is_loading());
    }

    #[tokio::test]
    async fn test_login_without_user_payload_is_a_failure() {
        let (client, _) = client_with(ScriptedTransport::new().reply(200, r#"{"success":true}"#));

        let failure = client.login(&login_request()).await.unwrap_err();

        assert_eq!(failure.message(), "Login failed");
        assert_eq!(failure.kind(), FailureKind::Unreadable { status: 200 });
        assert!(client.session().user().is_none());
    }

    #[tokio::test]
    async fn test_login_transport_failure_is_generic() {
        let (client, _) = client_with(
            ScriptedTransport::new().fail(TransportError::Network("connection refused".into())),
        );

        let failure = client.login(&login_request()).await.unwrap_err();

        assert_eq!(failure.kind(), FailureKind::Transport);
        assert_eq!(failure.message(), UNEXPECTED_ERROR);
    }

    #[tokio::test]
    async fn test_register_redirects_to_verification_and_adopts_data_user() {
        let (client, transport) = client_with(ScriptedTransport::new().reply(
            201,
            r#"{"success":true,"data":{"_id":"u2","username":"ada","email":"ada@example.com"},"token":"t"}"#,
        ));

        let registered = client.register(&register_request()).await.unwrap();

        assert_eq!(registered.redirect, Redirect::VerificationPending);
        assert_eq!(registered.user.as_ref().unwrap().id, "u2");
        assert_eq!(client.session().user().unwrap().id, "u2");

        let body = transport.requests()[0].body.clone().unwrap();
        assert_eq!(body["phone"], "+1 555-0100");
        assert_eq!(body["role"], "student");
    }

    #[tokio::test]
    async fn test_register_without_user_leaves_session_empty() {
        let (client, _) = client_with(
            ScriptedTransport::new().reply(201, r#"{"message":"Check your inbox"}"#),
        );

        let registered = client.register(&register_request()).await.unwrap();

        assert!(registered.user.is_none());
        assert!(client.session().user().is_none());
    }

    #[tokio::test]
    async fn test_register_explicit_failure_on_2xx() {
        let (client, _) = client_with(ScriptedTransport::new().reply(
            200,
            r#"{"success":false,"message":"Email already registered"}"#,
        ));

        let failure = client.register(&register_request()).await.unwrap_err();
        assert_eq!(failure.message(), "Email already registered");
    }

    #[tokio::test]
    async fn test_logout_clears_session_on_success_and_failure() {
        let (client, _) = client_with(ScriptedTransport::new().reply(200, "{}"));
        client.session().set_user(UserSummary {
            id: "u1".to_string(),
            ..UserSummary::default()
        });
        assert_eq!(client.logout().await.unwrap(), Redirect::Home);
        assert!(client.session().user().is_none());

        let (client, _) = client_with(ScriptedTransport::new().reply(500, ""));
        client.session().set_user(UserSummary {
            id: "u1".to_string(),
            ..UserSummary::default()
        });
        let failure = client.logout().await.unwrap_err();
        assert_eq!(failure.message(), "Logout failed");
        assert!(client.session().user().is_none());

        let (client, _) =
            client_with(ScriptedTransport::new().fail(TransportError::Timeout));
        assert!(client.logout().await.is_err());
        assert!(client.session().user().is_none());
    }

    #[tokio::test]
    async fn test_validate_reset_token_surfaces_server_message() {
        let (client, transport) = client_with(
            ScriptedTransport::new().reply(400, r#"{"message":"Invalid or expired token"}"#),
        );

        let failure = client.validate_reset_token("expired-token").await.unwrap_err();

        assert_eq!(failure.message(), "Invalid or expired token");
        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].path, "/api/user/validate-reset-token/expired-token");
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_slow_bootstrap_keeps_loading_past_other_operations() {
        let release = Arc::new(tokio::sync::Notify::new());
        let (client, transport) = client_with(
            ScriptedTransport::new()
                .reply(200, USER_BODY)
                .reply(200, r#"{"message":"Token is valid"}"#)
                .hold("/api/user/check-auth", release.clone()),
        );

        let (user, ()) = tokio::join!(client.bootstrap(), async {
            while transport.request_count() == 0 {
                tokio::task::yield_now().await;
            }
            assert!(client.validate_reset_token("tok").await.is_ok());
            assert!(client.session().is_loading());
            assert!(client.session().user().is_none());
            release.notify_one();
        });

        assert_eq!(user.unwrap().username, "ada");
        assert!(!client.session().is_loading());
        assert_eq!(client.session().user().unwrap().username, "ada");
    }

    #[tokio::test]
    async fn test_unsafe_token_never_reaches_network() {
        let (client, transport) = client_with(ScriptedTransport::new());

        let failure = client.validate_reset_token("../admin").await.unwrap_err();
        assert_eq!(failure.kind(), FailureKind::Invalid);
        assert_eq!(failure.message(), "Invalid or expired token");

        let failure = client.verify_email("").await.unwrap_err();
        assert_eq!(failure.message(), "Email verification failed");

        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_message_operations_return_server_message() {
        let (client, transport) = client_with(
            ScriptedTransport::new()
                .reply(200, r#"{"message":"Reset link sent"}"#)
                .reply(200, r#"{"message":"Password updated"}"#)
                .reply(200, r#"{"message":"Verification email sent"}"#),
        );

        let notice = client.request_password_reset("ada@example.com").await.unwrap();
        assert_eq!(notice.message.as_deref(), Some("Reset link sent"));

        let notice = client.reset_password("tok123", "Strong1!").await.unwrap();
        assert_eq!(notice.message.as_deref(), Some("Password updated"));

        let notice = client.resend_verification_email("ada@example.com").await.unwrap();
        assert_eq!(notice.message.as_deref(), Some("Verification email sent"));

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/api/user/forgot-password");
        assert_eq!(requests[1].path, "/api/user/reset-password");
        assert_eq!(requests[1].body.as_ref().unwrap()["token"], "tok123");
        assert_eq!(requests[2].path, "/api/user/resend-verification");
    }

    #[tokio::test]
    async fn test_verify_email_defaults_message_and_redirects_to_login() {
        let (client, transport) = client_with(ScriptedTransport::new().reply(200, "{}"));

        let notice = client.verify_email("abc").await.unwrap();

        assert_eq!(notice.message.as_deref(), Some(EMAIL_VERIFIED_MESSAGE));
        assert_eq!(notice.redirect, Some(Redirect::Login));
        assert_eq!(transport.requests()[0].path, "/api/user/verify-email/abc");
    }

    #[tokio::test]
    async fn test_malformed_bodies_never_panic_and_always_explain() {
        let bodies = ["", "null", "[]", "{", "{\"message\":null}", "\"text\"", "{\"success\":false}"];
        for body in bodies {
            let (client, _) = client_with(
                ScriptedTransport::new()
                    .reply(400, body)
                    .reply(500, body)
                    .reply(422, body),
            );
            let failure = client.login(&login_request()).await.unwrap_err();
            assert!(!failure.message().is_empty());
            let failure = client.request_password_reset("a@b.com").await.unwrap_err();
            assert!(!failure.message().is_empty());
            let failure = client.validate_reset_token("tok").await.unwrap_err();
            assert!(!failure.message().is_empty());
        }
    }

    #[tokio::test]
    async fn test_failed_operation_then_success_clears_error() {
        let (client, _) = client_with(
            ScriptedTransport::new()
                .reply(401, r#"{"message":"Invalid credentials"}"#)
                .reply(200, USER_BODY),
        );

        assert!(client.login(&login_request()).await.is_err());
        assert!(client.session().last_error().is_some());

        assert!(client.login(&login_request()).await.is_ok());
        assert!(client.session().last_error().is_none());
    }
}
