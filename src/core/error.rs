//! Error types shared by the transport, auth client and forms.

use crate::core::forms::FieldErrors;

/// Message shown when the request never produced a response.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";

/// Failures at the network boundary, before any response is available.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Unable to reach the server: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Failed to build request: {0}")]
    Request(String),
}

/// How an auth operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never completed.
    Transport,
    /// The server answered with an error and a usable message.
    Rejected { status: u16 },
    /// The server answered but the body had no usable message or payload.
    Unreadable { status: u16 },
    /// Rejected locally before any request was issued.
    Invalid,
}

/// Failed outcome of an auth operation. The message is never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthFailure {
    kind: FailureKind,
    message: String,
}

impl AuthFailure {
    /// Builds a failure, substituting `fallback` when `message` is blank.
    /// A non-blank server message is kept verbatim.
    pub fn new(kind: FailureKind, message: Option<&str>, fallback: &str) -> Self {
        let message = message
            .filter(|message| !message.trim().is_empty())
            .map_or_else(|| fallback.to_string(), str::to_string);
        let message = if message.is_empty() {
            UNEXPECTED_ERROR.to_string()
        } else {
            message
        };

        Self { kind, message }
    }

    pub fn transport(err: &TransportError) -> Self {
        tracing::warn!("Auth request failed before a response: {}", err);
        Self::new(FailureKind::Transport, None, UNEXPECTED_ERROR)
    }

    pub fn invalid(message: &str) -> Self {
        Self::new(FailureKind::Invalid, None, message)
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::Rejected { status } | FailureKind::Unreadable { status } => Some(status),
            FailureKind::Transport | FailureKind::Invalid => None,
        }
    }
}

/// Outcome of submitting a form: either it never left the client, or the
/// auth operation failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("Please correct the highlighted fields")]
    Invalid(FieldErrors),

    #[error(transparent)]
    Failed(#[from] AuthFailure),
}

impl FormError {
    /// Field errors when validation stopped the submission.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            FormError::Invalid(errors) => Some(errors),
            FormError::Failed(_) => None,
        }
    }

    /// Form-level message to show next to the submit button.
    pub fn general_message(&self) -> Option<&str> {
        match self {
            FormError::Invalid(_) => None,
            FormError::Failed(failure) => Some(failure.message()),
        }
    }
}
