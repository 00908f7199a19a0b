//! Package tracking records.

use super::DomainError;
use super::error::require_non_blank;

/// A package waiting to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPackage {
    pub package_name: String,
}

impl NewPackage {
    pub fn new(package_name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            package_name: require_non_blank("package_name", package_name)?,
        })
    }
}

/// A stored package. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub id: i64,
    pub package_name: String,
}
