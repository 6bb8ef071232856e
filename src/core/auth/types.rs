//! Request payloads and normalized outcomes for auth operations.
//!
//! Request types carry passwords, so their `Debug` output redacts them.

use std::fmt;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::session::UserSummary;

/// Role sent at registration when the form does not choose one.
pub const DEFAULT_ROLE: &str = "student";

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("phone", &self.phone)
            .field("role", &self.role)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct EmailRequest<'a> {
    pub email: &'a str,
}

#[derive(Clone, Serialize)]
pub(crate) struct ResetPasswordRequest<'a> {
    pub token: &'a str,
    pub password: &'a str,
}

/// Where the UI should navigate after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Redirect {
    #[display("/")]
    Home,
    #[display("/login")]
    Login,
    #[display("/verification-pending")]
    VerificationPending,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Home => "/",
            Redirect::Login => "/login",
            Redirect::VerificationPending => "/verification-pending",
        }
    }
}

/// Successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedIn {
    pub user: UserSummary,
    pub token: Option<String>,
    pub redirect: Redirect,
}

/// Successful registration. The user is present only when the API returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Registered {
    pub user: Option<UserSummary>,
    pub token: Option<String>,
    pub redirect: Redirect,
}

/// Success of a message-only operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notice {
    pub message: Option<String>,
    pub redirect: Option<Redirect>,
}

impl Notice {
    /// Server message, or `default` when the server sent none.
    pub fn message_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(default)
    }
}
