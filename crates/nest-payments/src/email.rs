//! Payer email validation

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email is required")]
    Required,

    #[error("Please enter a valid email address")]
    Invalid,
}

/// Validate the address collected before checkout
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Required);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(EmailError::Invalid);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("first.last+tag@mail.co.uk").is_ok());
    }

    #[test]
    fn test_required() {
        assert_eq!(validate_email(""), Err(EmailError::Required));
    }

    #[test]
    fn test_invalid() {
        for email in ["ada", "ada@", "ada@example", "a da@example.com", "@example.com", "ada@@x.io"] {
            assert_eq!(validate_email(email), Err(EmailError::Invalid), "{email}");
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(EmailError::Required.to_string(), "Email is required");
        assert_eq!(EmailError::Invalid.to_string(), "Please enter a valid email address");
    }
}
