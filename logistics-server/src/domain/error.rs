//! Domain error types.
//!
//! These errors represent validation failures on incoming records. They
//! are detected before anything touches the store or the network.

use super::{InvalidEmail, TimestampError};

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A required text field was empty or only whitespace
    #[error("{0} must not be empty")]
    Blank(&'static str),

    /// Email address failed validation
    #[error(transparent)]
    InvalidEmail(#[from] InvalidEmail),

    /// Timestamp could not be parsed or is out of range
    #[error(transparent)]
    InvalidTimestamp(#[from] TimestampError),
}

/// Trim `value` and reject it if nothing is left.
pub(crate) fn require_non_blank(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Blank(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmailAddress;

    #[test]
    fn error_display() {
        let err = DomainError::Blank("username");
        assert_eq!(err.to_string(), "username must not be empty");

        let err = DomainError::from(EmailAddress::parse("x").unwrap_err());
        assert_eq!(err.to_string(), "invalid email address: missing '@'");
    }

    #[test]
    fn require_non_blank_trims() {
        assert_eq!(require_non_blank("name", "  Acme  ").unwrap(), "Acme");
        assert_eq!(
            require_non_blank("name", " \t "),
            Err(DomainError::Blank("name"))
        );
    }
}
