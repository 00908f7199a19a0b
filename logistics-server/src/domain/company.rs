//! Company records.

use super::error::require_non_blank;
use super::{DomainError, EmailAddress};

/// A validated company registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub name: String,
    pub email: EmailAddress,
    /// Phone or registration number
    pub number: i64,
    /// Free-text postal address (may be empty)
    pub address: String,
}

impl NewCompany {
    pub fn new(name: &str, email: &str, number: i64, address: &str) -> Result<Self, DomainError> {
        Ok(Self {
            name: require_non_blank("name", name)?,
            email: EmailAddress::parse(email)?,
            number,
            address: address.trim().to_string(),
        })
    }
}

/// A stored company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub number: i64,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_company_valid() {
        let company = NewCompany::new(" Acme Freight ", "ops@acme.com", 5550100, " 1 Dock Rd ")
            .unwrap();
        assert_eq!(company.name, "Acme Freight");
        assert_eq!(company.email.as_str(), "ops@acme.com");
        assert_eq!(company.number, 5550100);
        assert_eq!(company.address, "1 Dock Rd");
    }

    #[test]
    fn address_may_be_empty() {
        let company = NewCompany::new("Acme", "ops@acme.com", 1, "").unwrap();
        assert_eq!(company.address, "");
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            NewCompany::new("  ", "ops@acme.com", 1, "x").unwrap_err(),
            DomainError::Blank("name")
        );
    }

    #[test]
    fn rejects_bad_email() {
        let err = NewCompany::new("Acme", "acme", 1, "x").unwrap_err();
        assert!(matches!(err, DomainError::InvalidEmail(_)));
    }
}
