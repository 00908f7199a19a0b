//! Persistent store.
//!
//! SQLite via `sqlx`, with one repository per durable entity. Uniqueness
//! of usernames, company names and emails is enforced by UNIQUE
//! constraints, so two racing inserts can never both succeed.
//!
//! The schema lives in `migrations/` and is embedded at compile time.

mod companies;
mod error;
mod packages;
mod users;

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

pub use companies::{CompanyRepository, SqliteCompanyRepository};
pub use error::StoreError;
pub use packages::{PackageRepository, SqlitePackageRepository};
pub use users::{SqliteUserRepository, StoredCredentials, UserRepository};

/// Connections for an on-disk database.
const MAX_CONNECTIONS: u32 = 5;

/// How long to wait for a pooled connection.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a connection pool for `database_url`, creating the file if needed.
///
/// An in-memory database lives only as long as its connection, so it gets
/// a single connection that is never recycled.
pub async fn connect(database_url: &str) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = SqlitePoolOptions::new().acquire_timeout(ACQUIRE_TIMEOUT);
    let pool_options = if is_in_memory(database_url) {
        pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options.max_connections(MAX_CONNECTIONS)
    };

    let pool = pool_options.connect_with(options).await?;
    info!(database_url, "connected to database");
    Ok(pool)
}

/// Apply any pending schema migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<(), StoreError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Fresh, migrated in-memory database for tests.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = connect("sqlite::memory:").await.unwrap();
    migrate(&pool).await.unwrap();
    pool
}
