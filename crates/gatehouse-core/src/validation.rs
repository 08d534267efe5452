//! Client-side validation rules for the signup and login forms.
//!
//! Each rule is a small, independently testable predicate returning
//! `Result<(), ValidationError>`. The form-level entry points compose the
//! predicates in a fixed, documented order with short-circuit evaluation:
//! the first failing rule decides the outcome and later rules never run.
//!
//! ## Signup order
//!
//! 1. Full name and email are present (supplemental profile fields)
//! 2. Password length >= 8
//! 3. Password contains an uppercase letter
//! 4. Password contains a digit
//! 5. Password matches its confirmation exactly
//! 6. Phone is exactly 10 decimal digits
//! 7. Email is plausibly formed
//!
//! ## Login order
//!
//! 1. Email and password are both non-empty
//! 2. Email is plausibly formed
//!
//! Every attempt is stateless: a rule sees only the snapshot captured at
//! submit time, never a previous attempt.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Exactly 10 decimal digits, nothing else.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// Permissive email shape: something@something.something, no whitespace or
/// extra '@'. Deliberately loose - the receiving end owns real validation.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A validation failure with its fixed user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A supplemental profile field (full name, email) was left blank.
    #[error("All fields are required")]
    MissingFields,

    /// Password shorter than the 8-character minimum.
    #[error("Password must be at least 8 characters long.")]
    PasswordTooShort,

    /// Password has no character in A-Z.
    #[error("Password must contain at least one uppercase letter.")]
    PasswordNoUppercase,

    /// Password has no character in 0-9.
    #[error("Password must contain at least one number.")]
    PasswordNoDigit,

    /// Password and confirmation differ.
    #[error("Passwords do not match.")]
    PasswordMismatch,

    /// Phone is not exactly 10 decimal digits.
    #[error("Please enter a valid 10-digit phone number.")]
    InvalidPhone,

    /// Email does not look like an address.
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Login submitted with an empty email or password.
    #[error("Please fill in all fields.")]
    EmptyCredentials,
}

/// Result type for validation rules.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Field values captured from the signup form at submit time.
///
/// Discarded as soon as validation settles; nothing is retained between
/// submission attempts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupAttempt {
    /// Full name of the registrant.
    pub full_name: String,
    /// Email address (also the account identifier downstream).
    pub email: String,
    /// Phone number, expected as bare digits.
    pub phone: String,
    /// Chosen password.
    pub password: String,
    /// Confirmation of the chosen password.
    pub confirm_password: String,
}

/// Field values captured from the login form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginAttempt {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

// ==================== Individual rules ====================

/// Supplemental profile fields must be present.
pub fn require_profile_fields(attempt: &SignupAttempt) -> Result<()> {
    if attempt.full_name.trim().is_empty() || attempt.email.trim().is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

/// Password must be at least 8 characters long.
pub fn check_password_length(password: &str) -> Result<()> {
    if password.chars().count() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Password must contain at least one uppercase ASCII letter.
pub fn check_password_uppercase(password: &str) -> Result<()> {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordNoUppercase);
    }
    Ok(())
}

/// Password must contain at least one decimal digit.
pub fn check_password_digit(password: &str) -> Result<()> {
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordNoDigit);
    }
    Ok(())
}

/// Password and confirmation must match exactly (case-sensitive).
pub fn check_passwords_match(password: &str, confirm: &str) -> Result<()> {
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Phone must be exactly 10 decimal digits with no other characters.
pub fn check_phone(phone: &str) -> Result<()> {
    if !PHONE_PATTERN.is_match(phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

/// Email must match the permissive address shape.
pub fn check_email(email: &str) -> Result<()> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Login fields must both be non-empty.
pub fn require_credentials(attempt: &LoginAttempt) -> Result<()> {
    if attempt.email.is_empty() || attempt.password.is_empty() {
        return Err(ValidationError::EmptyCredentials);
    }
    Ok(())
}

// ==================== Form-level composition ====================

/// Validates a signup attempt, short-circuiting at the first failure.
pub fn validate_signup(attempt: &SignupAttempt) -> Result<()> {
    require_profile_fields(attempt)?;
    check_password_length(&attempt.password)?;
    check_password_uppercase(&attempt.password)?;
    check_password_digit(&attempt.password)?;
    check_passwords_match(&attempt.password, &attempt.confirm_password)?;
    check_phone(&attempt.phone)?;
    check_email(&attempt.email)?;
    Ok(())
}

/// Validates a login attempt, short-circuiting at the first failure.
pub fn validate_login(attempt: &LoginAttempt) -> Result<()> {
    require_credentials(attempt)?;
    check_email(&attempt.email)?;
    Ok(())
}
