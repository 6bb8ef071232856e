//! Client side of the remote user-management API
//!
//! This module provides:
//! - The endpoint table (method and path per operation)
//! - Request payloads and normalized success outcomes
//! - `AuthClient`, which runs each operation and keeps the session store current

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{AuthClient, AuthResult, EMAIL_VERIFIED_MESSAGE};
pub use endpoints::Endpoint;
pub use types::{
    DEFAULT_ROLE, LoggedIn, LoginRequest, Notice, Redirect, RegisterRequest, Registered,
};
