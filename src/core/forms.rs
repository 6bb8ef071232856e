//! Form state and submission for the auth pages.
//!
//! Forms validate every field before anything is sent. A form with field
//! errors returns `FormError::Invalid` and never touches the network.
//! Values are trimmed before they are sent, except passwords.

use std::collections::BTreeMap;

use derive_more::Display;

use crate::core::auth::{
    AuthClient, DEFAULT_ROLE, LoggedIn, LoginRequest, Notice, RegisterRequest, Registered,
};
use crate::core::error::FormError;
use crate::core::storage::{KeyValueStore, REMEMBERED_EMAIL_KEY};
use crate::core::validation::{
    self, PasswordStrength, ValidationError, validate_confirm_password, validate_email,
    validate_password, validate_password_present, validate_phone, validate_username,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Field {
    #[display("username")]
    Username,
    #[display("email")]
    Email,
    #[display("phone")]
    Phone,
    #[display("password")]
    Password,
    #[display("confirmPassword")]
    ConfirmPassword,
}

/// Per-field error messages. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of a check; `Ok` clears any earlier error.
    pub fn check(&mut self, field: Field, result: Result<(), ValidationError>) {
        match result {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                self.errors.insert(field, err.to_string());
            }
        }
    }

    /// Message for `field`, or `""` when it is valid.
    pub fn get(&self, field: Field) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn into_result(self) -> Result<(), FormError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(FormError::Invalid(self))
        }
    }
}

/// Progress of a form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl SubmitState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmitState::InFlight)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// State after a submission finished. Field errors are shown per field,
    /// so they leave no form-level message.
    pub fn from_result<T>(result: &Result<T, FormError>) -> Self {
        match result {
            Ok(_) => SubmitState::Succeeded,
            Err(FormError::Invalid(_)) => SubmitState::Idle,
            Err(FormError::Failed(failure)) => SubmitState::Failed(failure.message().to_string()),
        }
    }

    pub fn reset(&mut self) {
        *self = SubmitState::Idle;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    /// Empty form prefilled with the remembered email, if any.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        match store.get(REMEMBERED_EMAIL_KEY) {
            Some(email) if !email.is_empty() => Self {
                email,
                remember_me: true,
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(Field::Email, validate_email(&self.email));
        errors.check(Field::Password, validate_password_present(&self.password));
        errors
    }

    pub fn request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    /// Stores or forgets the email according to the opt-in.
    pub fn remember(&self, store: &dyn KeyValueStore) {
        let email = self.email.trim();
        if self.remember_me && !email.is_empty() {
            store.set(REMEMBERED_EMAIL_KEY, email);
        } else {
            store.remove(REMEMBERED_EMAIL_KEY);
        }
    }

    /// Applies a change of the opt-in and persists or clears the email at once.
    pub fn set_remember_me(&mut self, remember_me: bool, store: &dyn KeyValueStore) {
        self.remember_me = remember_me;
        self.remember(store);
    }

    pub async fn submit(
        &self,
        client: &AuthClient,
        store: &dyn KeyValueStore,
    ) -> Result<LoggedIn, FormError> {
        self.validate().into_result()?;
        let logged_in = client.login(&self.request()).await?;
        self.remember(store);
        Ok(logged_in)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: DEFAULT_ROLE.to_string(),
        }
    }
}

impl SignupForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(Field::Username, validate_username(&self.username));
        errors.check(Field::Email, validate_email(&self.email));
        errors.check(Field::Phone, validate_phone(&self.phone));
        errors.check(Field::Password, validate_password(&self.password));
        errors.check(
            Field::ConfirmPassword,
            validate_confirm_password(&self.password, &self.confirm_password),
        );
        errors
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(validation::password_strength(&self.password))
    }

    pub fn request(&self) -> RegisterRequest {
        let role = self.role.trim();
        RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone: self.phone.trim().to_string(),
            role: if role.is_empty() { DEFAULT_ROLE } else { role }.to_string(),
        }
    }

    pub async fn submit(&self, client: &AuthClient) -> Result<Registered, FormError> {
        self.validate().into_result()?;
        Ok(client.register(&self.request()).await?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(Field::Password, validate_password(&self.password));
        errors.check(
            Field::ConfirmPassword,
            validate_confirm_password(&self.password, &self.confirm_password),
        );
        errors
    }

    pub async fn submit(&self, client: &AuthClient, token: &str) -> Result<Notice, FormError> {
        self.validate().into_result()?;
        Ok(client.reset_password(token, &self.password).await?)
    }
}

/// Single-email form used by the forgot-password and verification-pending
/// pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailForm {
    pub email: String,
}

impl EmailForm {
    pub fn validate_for_reset(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(Field::Email, validate_email(&self.email));
        errors
    }

    /// The resend page only asks for a non-empty address.
    pub fn validate_for_resend(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let result = if self.email.trim().is_empty() {
            Err(ValidationError::EmailAddressMissing)
        } else {
            Ok(())
        };
        errors.check(Field::Email, result);
        errors
    }

    pub async fn submit_reset(&self, client: &AuthClient) -> Result<Notice, FormError> {
        self.validate_for_reset().into_result()?;
        Ok(client.request_password_reset(self.email.trim()).await?)
    }

    pub async fn submit_resend(&self, client: &AuthClient) -> Result<Notice, FormError> {
        self.validate_for_resend().into_result()?;
        Ok(client.resend_verification_email(self.email.trim()).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::session::SessionStore;
    use crate::core::storage::MemoryStore;
    use crate::core::testing::ScriptedTransport;

    fn client_with(transport: ScriptedTransport) -> (AuthClient, Arc<ScriptedTransport>) {
        let transport = Arc::new(transport);
        let client = AuthClient::with_session(transport.clone(), SessionStore::new());
        (client, transport)
    }

    fn valid_signup() -> SignupForm {
        SignupForm {
            username: "  ada  ".to_string(),
            email: " ada@example.com ".to_string(),
            phone: "+1 555-0100".to_string(),
            password: "Strong1!".to_string(),
            confirm_password: "Strong1!".to_string(),
            ..SignupForm::default()
        }
    }

    #[tokio::test]
    async fn test_login_with_empty_password_never_hits_network() {
        let (client, transport) = client_with(ScriptedTransport::new());
        let store = MemoryStore::new();
        let form = LoginForm {
            email: "ada@example.com".to_string(),
            ..LoginForm::default()
        };

        let err = form.submit(&client, &store).await.unwrap_err();

        let errors = err.field_errors().unwrap();
        assert_eq!(errors.get(Field::Password), "Password is required");
        assert_eq!(errors.get(Field::Email), "");
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_login_success_remembers_email_on_opt_in() {
        let (client, transport) = client_with(
            ScriptedTransport::new()
                .reply(200, r#"{"success":true,"user":{"id":"1","email":"ada@example.com"}}"#)
                .reply(200, r#"{"success":true,"user":{"id":"1","email":"ada@example.com"}}"#),
        );
        let store = MemoryStore::new();
        let mut form = LoginForm {
            email: " ada@example.com ".to_string(),
            password: "pw".to_string(),
            remember_me: true,
        };

        form.submit(&client, &store).await.unwrap();
        assert_eq!(
            store.get(REMEMBERED_EMAIL_KEY).as_deref(),
            Some("ada@example.com")
        );
        assert_eq!(
            transport.requests()[0].body.as_ref().unwrap()["email"],
            "ada@example.com"
        );

        let restored = LoginForm::restore(&store);
        assert_eq!(restored.email, "ada@example.com");
        assert!(restored.remember_me);
        assert!(restored.password.is_empty());

        form.remember_me = false;
        form.submit(&client, &store).await.unwrap();
        assert_eq!(store.get(REMEMBERED_EMAIL_KEY), None);
    }

    #[test]
    fn test_opting_out_clears_remembered_email() {
        let store = MemoryStore::new();
        store.set(REMEMBERED_EMAIL_KEY, "ada@example.com");
        let mut form = LoginForm::restore(&store);
        assert!(form.remember_me);

        form.set_remember_me(false, &store);

        assert!(!form.remember_me);
        assert_eq!(store.get(REMEMBERED_EMAIL_KEY), None);
        assert!(!LoginForm::restore(&store).remember_me);
    }

    #[test]
    fn test_opting_in_stores_typed_email_before_submit() {
        let store = MemoryStore::new();
        let mut form = LoginForm {
            email: "  grace@example.com ".to_string(),
            ..LoginForm::default()
        };

        form.set_remember_me(true, &store);
        assert_eq!(
            store.get(REMEMBERED_EMAIL_KEY).as_deref(),
            Some("grace@example.com")
        );

        // Nothing typed yet: opting in has nothing to keep
        let mut empty = LoginForm::default();
        empty.set_remember_me(true, &store);
        assert_eq!(store.get(REMEMBERED_EMAIL_KEY), None);
    }

    #[tokio::test]
    async fn test_login_failure_leaves_store_alone() {
        let (client, _) = client_with(
            ScriptedTransport::new().reply(401, r#"{"message":"Invalid credentials"}"#),
        );
        let store = MemoryStore::new();
        store.set(REMEMBERED_EMAIL_KEY, "old@example.com");
        let form = LoginForm {
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
            remember_me: true,
        };

        let err = form.submit(&client, &store).await.unwrap_err();

        assert_eq!(err.general_message(), Some("Invalid credentials"));
        assert_eq!(
            store.get(REMEMBERED_EMAIL_KEY).as_deref(),
            Some("old@example.com")
        );
    }

    #[test]
    fn test_signup_reports_every_field() {
        let errors = SignupForm::default().validate();
        assert_eq!(errors.get(Field::Username), "Username is required");
        assert_eq!(errors.get(Field::Email), "Email is required");
        assert_eq!(errors.get(Field::Phone), "Phone number is required");
        assert_eq!(errors.get(Field::Password), "Password is required");
        assert_eq!(errors.get(Field::ConfirmPassword), "Please confirm your password");
        assert_eq!(errors.len(), 5);

        assert!(valid_signup().validate().is_empty());
    }

    #[tokio::test]
    async fn test_signup_sends_trimmed_values_and_default_role() {
        let (client, transport) = client_with(
            ScriptedTransport::new().reply(201, r#"{"success":true,"message":"Registered"}"#),
        );

        let registered = valid_signup().submit(&client).await.unwrap();

        assert_eq!(registered.redirect.path(), "/verification-pending");
        let body = transport.requests()[0].body.clone().unwrap();
        assert_eq!(body["username"], "ada");
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["role"], "student");
    }

    #[tokio::test]
    async fn test_signup_mismatch_blocks_submission() {
        let (client, transport) = client_with(ScriptedTransport::new());
        let form = SignupForm {
            confirm_password: "Different1!".to_string(),
            ..valid_signup()
        };

        let err = form.submit(&client).await.unwrap_err();

        assert_eq!(
            err.field_errors().unwrap().get(Field::ConfirmPassword),
            "Passwords do not match"
        );
        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_signup_strength() {
        let mut form = SignupForm::default();
        assert_eq!(form.strength(), PasswordStrength::Weak);
        form.password = "Strong1!".to_string();
        assert_eq!(form.strength(), PasswordStrength::Strong);
    }

    #[tokio::test]
    async fn test_reset_password_form() {
        let (client, transport) = client_with(
            ScriptedTransport::new().reply(200, r#"{"message":"Password reset successful"}"#),
        );

        let weak = ResetPasswordForm {
            password: "weak".to_string(),
            confirm_password: "weak".to_string(),
        };
        let err = weak.submit(&client, "tok").await.unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().get(Field::Password),
            "Password must be at least 8 characters"
        );
        assert_eq!(transport.request_count(), 0);

        let form = ResetPasswordForm {
            password: "Strong1!".to_string(),
            confirm_password: "Strong1!".to_string(),
        };
        let notice = form.submit(&client, "tok").await.unwrap();
        assert_eq!(notice.message.as_deref(), Some("Password reset successful"));
    }

    #[tokio::test]
    async fn test_email_form_rules_per_page() {
        let (client, transport) = client_with(
            ScriptedTransport::new().reply(200, r#"{"message":"Verification email sent"}"#),
        );

        let empty = EmailForm::default();
        assert_eq!(
            empty.validate_for_resend().get(Field::Email),
            "Please enter your email address"
        );
        assert_eq!(empty.validate_for_reset().get(Field::Email), "Email is required");

        let malformed = EmailForm {
            email: "nope".to_string(),
        };
        assert!(malformed.submit_reset(&client).await.is_err());
        assert_eq!(transport.request_count(), 0);

        let notice = malformed.submit_resend(&client).await.unwrap();
        assert_eq!(notice.message_or(""), "Verification email sent");
    }

    #[test]
    fn test_submit_state_transitions() {
        let ok: Result<(), FormError> = Ok(());
        assert_eq!(SubmitState::from_result(&ok), SubmitState::Succeeded);

        let failed: Result<(), FormError> = Err(FormError::Failed(
            crate::core::error::AuthFailure::invalid("Login failed"),
        ));
        let mut state = SubmitState::from_result(&failed);
        assert_eq!(state.error(), Some("Login failed"));

        state.reset();
        assert_eq!(state, SubmitState::Idle);
        assert!(!state.is_in_flight());
    }

    #[test]
    fn test_field_errors_check_clears() {
        let mut errors = FieldErrors::new();
        errors.check(Field::Email, Err(ValidationError::EmailInvalid));
        assert_eq!(errors.get(Field::Email), "Please enter a valid email");
        errors.check(Field::Email, Ok(()));
        assert!(errors.is_empty());
    }
}
