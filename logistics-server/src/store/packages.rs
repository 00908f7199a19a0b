//! Package persistence.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::{NewPackage, Package};

use super::StoreError;

/// Storage operations on packages.
#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn insert(&self, package: &NewPackage) -> Result<Package, StoreError>;

    /// All packages, in id order.
    async fn list(&self) -> Result<Vec<Package>, StoreError>;

    /// Delete by id, returning the number of rows removed.
    async fn delete(&self, id: i64) -> Result<u64, StoreError>;
}

/// SQLite implementation of [`PackageRepository`].
#[derive(Debug, Clone)]
pub struct SqlitePackageRepository {
    pool: SqlitePool,
}

impl SqlitePackageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PackageRow {
    id: i64,
    package_name: String,
}

impl From<PackageRow> for Package {
    fn from(row: PackageRow) -> Self {
        Package {
            id: row.id,
            package_name: row.package_name,
        }
    }
}

#[async_trait]
impl PackageRepository for SqlitePackageRepository {
    async fn insert(&self, package: &NewPackage) -> Result<Package, StoreError> {
        let row: PackageRow = sqlx::query_as(
            "INSERT INTO packages (package_name) VALUES (?) RETURNING id, package_name",
        )
        .bind(&package.package_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Package>, StoreError> {
        let rows: Vec<PackageRow> =
            sqlx::query_as("SELECT id, package_name FROM packages ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Package::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM packages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
