//! Normalizes the remote API's response bodies.
//!
//! Endpoints disagree on field names (`user` vs `data`, optional `token`,
//! `message` vs `error`). Those quirks are absorbed here so the auth client
//! works against one shape. Bodies are parsed leniently: an unparsable body
//! is treated as an empty object, never as a crash.

use serde_json::{Map, Value};

use crate::core::error::{AuthFailure, FailureKind};
use crate::core::http::ApiResponse;
use crate::core::session::UserSummary;

/// Parsed JSON object of a response body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    status: u16,
    fields: Map<String, Value>,
}

impl Payload {
    /// Parses a body, yielding an empty payload for anything but a JSON object.
    pub fn parse(body: &str) -> Self {
        let fields = match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(fields)) => fields,
            _ => Map::new(),
        };
        Self { status: 0, fields }
    }

    /// HTTP status of the response this payload came from, 0 if unknown.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Human-readable server message, from `message` or else `error`.
    pub fn message(&self) -> Option<&str> {
        ["message", "error"]
            .iter()
            .filter_map(|key| self.fields.get(*key).and_then(Value::as_str))
            .find(|message| !message.trim().is_empty())
    }

    /// `Some(false)` when the body explicitly reports failure.
    pub fn success_flag(&self) -> Option<bool> {
        self.fields.get("success").and_then(Value::as_bool)
    }

    /// User object from `user`, else `data` or `data.user`. An object with
    /// no id, username or email counts as absent.
    pub fn user(&self) -> Option<UserSummary> {
        let candidate = match self.fields.get("user") {
            Some(user @ Value::Object(_)) => Some(user),
            _ => match self.fields.get("data") {
                Some(Value::Object(data)) => match data.get("user") {
                    Some(user @ Value::Object(_)) => Some(user),
                    _ => self.fields.get("data"),
                },
                _ => None,
            },
        }?;

        serde_json::from_value::<UserSummary>(candidate.clone())
            .ok()
            .filter(|user| !(user.id.is_empty() && user.username.is_empty() && user.email.is_empty()))
    }

    pub fn token(&self) -> Option<String> {
        self.fields
            .get("token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }
}

/// Applies the uniform success/failure contract to a raw response.
///
/// Non-2xx responses and 2xx bodies with `"success": false` become failures
/// carrying the server's message, or `fallback` when there is none.
pub fn interpret(response: &ApiResponse, fallback: &str) -> Result<Payload, AuthFailure> {
    let payload = Payload {
        status: response.status,
        ..Payload::parse(&response.body)
    };

    if response.is_success() && payload.success_flag() != Some(false) {
        return Ok(payload);
    }

    let kind = match payload.message() {
        Some(_) => FailureKind::Rejected {
            status: response.status,
        },
        None => FailureKind::Unreadable {
            status: response.status,
        },
    };

    Err(AuthFailure::new(kind, payload.message(), fallback))
}
