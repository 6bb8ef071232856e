//! Endpoint table for the remote user API.

use crate::core::http::Method;

/// One remote operation. Token-bearing variants carry the path token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    CheckAuth,
    Register,
    Login,
    Logout,
    ForgotPassword,
    ValidateResetToken(&'a str),
    ResetPassword,
    ResendVerification,
    VerifyEmail(&'a str),
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::CheckAuth | Endpoint::ValidateResetToken(_) | Endpoint::VerifyEmail(_) => {
                Method::Get
            }
            Endpoint::Register
            | Endpoint::Login
            | Endpoint::Logout
            | Endpoint::ForgotPassword
            | Endpoint::ResetPassword
            | Endpoint::ResendVerification => Method::Post,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::ValidateResetToken(token) => {
                format!("/api/user/validate-reset-token/{token}")
            }
            Endpoint::VerifyEmail(token) => format!("/api/user/verify-email/{token}"),
            fixed => fixed.fixed_path().to_string(),
        }
    }

    /// Path safe for logs: path tokens are replaced by a placeholder.
    pub fn redacted_path(&self) -> String {
        match self {
            Endpoint::ValidateResetToken(_) => "/api/user/validate-reset-token/:token".to_string(),
            Endpoint::VerifyEmail(_) => "/api/user/verify-email/:token".to_string(),
            fixed => fixed.fixed_path().to_string(),
        }
    }

    /// Message surfaced when the server gives no usable one.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Endpoint::CheckAuth => "Failed to check authentication status",
            Endpoint::Register => "Registration failed",
            Endpoint::Login => "Login failed",
            Endpoint::Logout => "Logout failed",
            Endpoint::ForgotPassword => "Failed to send reset link",
            Endpoint::ValidateResetToken(_) => "Invalid or expired token",
            Endpoint::ResetPassword => "Failed to reset password",
            Endpoint::ResendVerification => "Failed to resend verification email",
            Endpoint::VerifyEmail(_) => "Email verification failed",
        }
    }

    fn fixed_path(&self) -> &'static str {
        match self {
            Endpoint::CheckAuth => "/api/user/check-auth",
            Endpoint::Register => "/api/user/register",
            Endpoint::Login => "/api/user/login",
            Endpoint::Logout => "/api/user/logout",
            Endpoint::ForgotPassword => "/api/user/forgot-password",
            Endpoint::ResetPassword => "/api/user/reset-password",
            Endpoint::ResendVerification => "/api/user/resend-verification",
            Endpoint::ValidateResetToken(_) => "/api/user/validate-reset-token",
            Endpoint::VerifyEmail(_) => "/api/user/verify-email",
        }
    }
}

/// Whether a token can be placed in a URL path segment as-is.
pub fn is_path_safe_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && token != "."
        && token != ".."
}
