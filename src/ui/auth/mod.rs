//! Authentication UI module
//!
//! This module provides the auth context and the header user menu
//! for the Cognify frontend.

mod context;
mod user_menu;

pub use context::{AuthContext, preference_store, provide_auth_context, use_auth_context};
pub use user_menu::{UserAvatar, UserMenu};
