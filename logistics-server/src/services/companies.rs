//! Company registration.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::{Company, DomainError, NewCompany};
use crate::store::{CompanyRepository, StoreError};

/// Errors from company operations.
#[derive(Debug, thiserror::Error)]
pub enum CompanyError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Company name already registered")]
    NameTaken,

    #[error("Company email already registered")]
    EmailTaken,

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for CompanyError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::UniqueViolation(msg) if msg.contains("companies.email") => {
                CompanyError::EmailTaken
            }
            StoreError::UniqueViolation(msg) if msg.contains("companies.name") => {
                CompanyError::NameTaken
            }
            _ => CompanyError::Store(err),
        }
    }
}

#[derive(Clone)]
pub struct CompanyService {
    companies: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }

    #[instrument(skip_all, fields(name = %name))]
    pub async fn create_company(
        &self,
        name: &str,
        email: &str,
        number: i64,
        address: &str,
    ) -> Result<Company, CompanyError> {
        let company = NewCompany::new(name, email, number, address)?;

        if self.companies.name_exists(&company.name).await? {
            return Err(CompanyError::NameTaken);
        }
        if self.companies.email_exists(company.email.as_str()).await? {
            return Err(CompanyError::EmailTaken);
        }

        let stored = self.companies.insert(&company).await?;
        info!(company_id = stored.id, "company registered");
        Ok(stored)
    }
}

impl std::fmt::Debug for CompanyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompanyService").finish_non_exhaustive()
    }
}
