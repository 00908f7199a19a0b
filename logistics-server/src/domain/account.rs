//! User account records.

use super::error::require_non_blank;
use super::{DomainError, EmailAddress};

/// A validated registration request.
///
/// The password is held in plain text only until it is hashed by the
/// account service; it is never persisted or echoed back.
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub email: EmailAddress,
    pub password: String,
}

impl NewUser {
    /// Validate the raw registration fields.
    ///
    /// Username is trimmed; the password is kept verbatim but must not be
    /// blank.
    pub fn new(username: &str, email: &str, password: &str) -> Result<Self, DomainError> {
        let username = require_non_blank("username", username)?;
        let email = EmailAddress::parse(email)?;
        if password.trim().is_empty() {
            return Err(DomainError::Blank("password"));
        }

        Ok(Self {
            username,
            email,
            password: password.to_string(),
        })
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credentials presented at login.
#[derive(Clone)]
pub struct LoginAttempt {
    pub username: String,
    pub password: String,
}

impl LoginAttempt {
    pub fn new(username: &str, password: &str) -> Result<Self, DomainError> {
        let username = require_non_blank("username", username)?;
        if password.is_empty() {
            return Err(DomainError::Blank("password"));
        }
        Ok(Self {
            username,
            password: password.to_string(),
        })
    }
}

impl std::fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginAttempt")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A registered user, as visible outside the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}
