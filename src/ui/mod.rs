pub mod auth;
pub mod common;
pub mod courses;
pub mod icon;
pub mod layout;
pub mod pages;

pub use auth::{AuthContext, UserMenu, provide_auth_context, use_auth_context};
pub use courses::{CatalogContext, provide_catalog_context, use_catalog_context};
pub use icon::{Icon, icons};
pub use layout::Header;
