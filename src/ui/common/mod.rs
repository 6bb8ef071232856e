//! Common reusable UI components
//!
//! Form fields, banners and loading indicators shared by the auth and
//! course pages.

pub mod form;
pub mod message;
pub mod spinner;

pub use form::{CheckboxField, FieldError, FormField, clear_field, field_error};
pub use message::{ErrorMessage, SuccessMessage};
pub use spinner::{InlineSpinner, LoadingSpinner, SubmitButton};
