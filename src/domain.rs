//! Login credentials and their validation rules.
//!
//! Validation is a pure function of the raw field values so it can be unit
//! tested without any rendering or network machinery. The form never builds a
//! `Credentials` value that has not passed validation.

use serde::Serialize;

pub const MSG_INVALID_EMAIL: &str = "Invalid email address";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";

const MIN_PASSWORD_CHARS: usize = 8;

/// A validated email/password pair, serialized as the login request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Per-field validation messages, replaced wholesale on every submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

impl Credentials {
    /// Validates the raw field values and builds `Credentials` only if both
    /// constraints hold. On failure every offending field gets its message.
    pub fn parse(email: &str, password: &str) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if !is_valid_email(email) {
            errors.email = Some(MSG_INVALID_EMAIL);
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            errors.password = Some(MSG_PASSWORD_TOO_SHORT);
        }

        if errors.is_empty() {
            Ok(Self {
                email: email.to_string(),
                password: password.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Email grammar check: one `@`, a dot-separated domain of alphanumeric or
/// hyphen labels, no whitespace, no leading/trailing/doubled dots in the
/// local part. Intentionally stricter than "contains an @" but far short of
/// full RFC 5321; the server stays the final authority.
fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.rsplit_once('@') else {
        return false;
    };
    if local.is_empty()
        || local.contains('@')
        || local.starts_with('.')
        || local.ends_with('.')
        || local.contains("..")
    {
        return false;
    }
    let mut labels = domain.split('.');
    let valid_label = |label: &str| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    };
    // Require a dotted domain: "user@localhost" is rejected here.
    let first = labels.next();
    let rest: Vec<&str> = labels.collect();
    match first {
        Some(label) if !rest.is_empty() => valid_label(label) && rest.into_iter().all(valid_label),
        _ => false,
    }
}
