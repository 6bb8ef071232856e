//! Field validation for the auth and course forms.
//!
//! Every check is a pure function returning `Ok(())` or a `ValidationError`
//! whose `Display` is the user-facing message. `message_of` flattens a result
//! into the "empty string means valid" form the forms render.

use std::sync::LazyLock;

use derive_more::Display;
use regex::Regex;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Username length bounds, in characters.
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 30;

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

static PHONE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[0-9\s+-]+$").ok());

/// A failed field check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Password must contain at least one uppercase letter")]
    PasswordMissingUppercase,
    #[error("Password must contain at least one number")]
    PasswordMissingNumber,
    #[error("Password must contain at least one special character")]
    PasswordMissingSpecial,
    #[error("Please confirm your password")]
    ConfirmRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Username is required")]
    UsernameRequired,
    #[error("Username must be at least 3 characters long")]
    UsernameTooShort,
    #[error("Username cannot exceed 30 characters")]
    UsernameTooLong,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Please provide a valid phone number")]
    PhoneInvalid,
    #[error("Please enter your email address")]
    EmailAddressMissing,
}

/// Password strength bucket shown under the signup password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum PasswordStrength {
    #[display("Weak")]
    Weak,
    #[display("Fair")]
    Fair,
    #[display("Good")]
    Good,
    #[display("Strong")]
    Strong,
}

impl PasswordStrength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => PasswordStrength::Weak,
            2 => PasswordStrength::Fair,
            3 => PasswordStrength::Good,
            _ => PasswordStrength::Strong,
        }
    }
}

/// Renders a check result as its message, or `""` when valid.
pub fn message_of(result: Result<(), ValidationError>) -> String {
    result.err().map(|err| err.to_string()).unwrap_or_default()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        Err(ValidationError::EmailRequired)
    } else if !is_valid_email(email) {
        Err(ValidationError::EmailInvalid)
    } else {
        Ok(())
    }
}

/// Presence-only check used by the login form.
pub fn validate_password_present(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        Err(ValidationError::PasswordRequired)
    } else {
        Ok(())
    }
}

/// Full strength rules for new passwords. Reports the first failing rule.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    validate_password_present(password)?;

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordMissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordMissingNumber);
    }
    if !password.chars().any(is_special) {
        return Err(ValidationError::PasswordMissingSpecial);
    }

    Ok(())
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if confirm.is_empty() {
        Err(ValidationError::ConfirmRequired)
    } else if password != confirm {
        Err(ValidationError::PasswordMismatch)
    } else {
        Ok(())
    }
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let username = username.trim();
    let length = username.chars().count();

    if username.is_empty() {
        Err(ValidationError::UsernameRequired)
    } else if length < MIN_USERNAME_LENGTH {
        Err(ValidationError::UsernameTooShort)
    } else if length > MAX_USERNAME_LENGTH {
        Err(ValidationError::UsernameTooLong)
    } else {
        Ok(())
    }
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let phone = phone.trim();
    if phone.is_empty() {
        Err(ValidationError::PhoneRequired)
    } else if !PHONE_RE.as_ref().is_some_and(|re| re.is_match(phone)) {
        Err(ValidationError::PhoneInvalid)
    } else {
        Ok(())
    }
}

/// Scores a password 0..=4: one point each for length, an uppercase letter,
/// a digit, and a special character.
pub fn password_strength(password: &str) -> u8 {
    let checks = [
        password.chars().count() >= MIN_PASSWORD_LENGTH,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(is_special),
    ];
    checks.iter().filter(|passed| **passed).count() as u8
}

fn is_special(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}
