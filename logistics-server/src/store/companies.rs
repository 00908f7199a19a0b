//! Company persistence.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::{Company, NewCompany};

use super::StoreError;

/// Storage operations on companies.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Fails with [`StoreError::UniqueViolation`] if the name or email is taken.
    async fn insert(&self, company: &NewCompany) -> Result<Company, StoreError>;

    async fn name_exists(&self, name: &str) -> Result<bool, StoreError>;

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError>;
}

/// SQLite implementation of [`CompanyRepository`].
#[derive(Debug, Clone)]
pub struct SqliteCompanyRepository {
    pool: SqlitePool,
}

impl SqliteCompanyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CompanyRow {
    id: i64,
    name: String,
    email: String,
    number: i64,
    address: String,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            name: row.name,
            email: row.email,
            number: row.number,
            address: row.address,
        }
    }
}

#[async_trait]
impl CompanyRepository for SqliteCompanyRepository {
    async fn insert(&self, company: &NewCompany) -> Result<Company, StoreError> {
        let row: CompanyRow = sqlx::query_as(
            r#"
            INSERT INTO companies (name, email, number, address)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, email, number, address
            "#,
        )
        .bind(&company.name)
        .bind(company.email.as_str())
        .bind(company.number)
        .bind(&company.address)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn name_exists(&self, name: &str) -> Result<bool, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM companies WHERE name = ?")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM companies WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}
