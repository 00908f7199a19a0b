//! Email address type.

use std::fmt;

/// Error returned when parsing an invalid email address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid email address: {reason}")]
pub struct InvalidEmail {
    reason: &'static str,
}

impl InvalidEmail {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Longest address accepted (RFC 5321 path limit).
const MAX_LEN: usize = 254;

/// A syntactically well-formed email address.
///
/// Surrounding whitespace is stripped. The address must have exactly one
/// `@`, a non-empty local part, and a dotted domain made of non-empty
/// alphanumeric/hyphen labels. Case is preserved.
///
/// # Examples
///
/// ```
/// use logistics_server::domain::EmailAddress;
///
/// let email = EmailAddress::parse(" dispatch@example.com ").unwrap();
/// assert_eq!(email.as_str(), "dispatch@example.com");
///
/// assert!(EmailAddress::parse("no-at-sign").is_err());
/// assert!(EmailAddress::parse("user@localhost").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and validate an email address.
    pub fn parse(s: &str) -> Result<Self, InvalidEmail> {
        let s = s.trim();

        if s.is_empty() {
            return Err(InvalidEmail::new("must not be empty"));
        }
        if s.len() > MAX_LEN {
            return Err(InvalidEmail::new("too long"));
        }
        if s.chars().any(char::is_whitespace) {
            return Err(InvalidEmail::new("must not contain whitespace"));
        }

        let Some((local, domain)) = s.split_once('@') else {
            return Err(InvalidEmail::new("missing '@'"));
        };

        if local.is_empty() {
            return Err(InvalidEmail::new("missing local part"));
        }
        if domain.contains('@') {
            return Err(InvalidEmail::new("more than one '@'"));
        }
        if !domain.contains('.') {
            return Err(InvalidEmail::new("domain must contain a '.'"));
        }

        for label in domain.split('.') {
            if label.is_empty() {
                return Err(InvalidEmail::new("domain has an empty label"));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(InvalidEmail::new("domain label starts or ends with '-'"));
            }
            if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(InvalidEmail::new("domain has invalid characters"));
            }
        }

        Ok(Self(s.to_string()))
    }

    /// Returns the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the address, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EmailAddress({})", self.0)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
