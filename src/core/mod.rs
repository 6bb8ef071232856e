//! Platform-neutral client logic: API transport, auth session, forms and the
//! course catalog. Nothing in here depends on Leptos.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod forms;
pub mod http;
pub mod response;
pub mod session;
pub mod storage;
pub mod validation;

#[cfg(test)]
mod testing;
#[cfg(all(test, feature = "ssr"))]
mod tests;

pub use auth::{AuthClient, AuthResult};
pub use config::ApiConfig;
pub use error::{AuthFailure, FailureKind, FormError, TransportError};
pub use session::{Session, SessionStore, UserSummary};
