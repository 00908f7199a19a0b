//! Package tracking.

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, NewPackage, Package};
use crate::store::{PackageRepository, StoreError};

/// Message returned after a package is removed.
pub const PACKAGE_DELETED_MESSAGE: &str = "Package deleted";

#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("Package not found")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct PackageService {
    packages: Arc<dyn PackageRepository>,
}

impl PackageService {
    pub fn new(packages: Arc<dyn PackageRepository>) -> Self {
        Self { packages }
    }

    pub async fn add_package(&self, package_name: &str) -> Result<Package, PackageError> {
        let package = NewPackage::new(package_name)?;
        let stored = self.packages.insert(&package).await?;
        info!(package_id = stored.id, "package added");
        Ok(stored)
    }

    pub async fn list_packages(&self) -> Result<Vec<Package>, PackageError> {
        Ok(self.packages.list().await?)
    }

    /// Delete a package; a missing id is an error.
    pub async fn remove_package(&self, id: i64) -> Result<(), PackageError> {
        match self.packages.delete(id).await? {
            0 => Err(PackageError::NotFound(id)),
            _ => {
                info!(package_id = id, "package removed");
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for PackageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackageService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{SqlitePackageRepository, test_pool};

    async fn service() -> PackageService {
        let repo = SqlitePackageRepository::new(test_pool().await);
        PackageService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn add_list_remove() {
        let svc = service().await;

        let added = svc.add_package("Pallet of bricks").await.unwrap();
        let listed = svc.list_packages().await.unwrap();
        assert_eq!(listed.iter().filter(|p| p.id == added.id).count(), 1);

        svc.remove_package(added.id).await.unwrap();
        assert!(svc.list_packages().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_missing_is_not_found() {
        let svc = service().await;

        let err = svc.remove_package(7).await.unwrap_err();
        assert!(matches!(err, PackageError::NotFound(7)));
        assert_eq!(err.to_string(), "Package not found");
    }

    #[tokio::test]
    async fn remove_twice_is_not_found() {
        let svc = service().await;
        let added = svc.add_package("crate").await.unwrap();

        svc.remove_package(added.id).await.unwrap();
        assert!(matches!(
            svc.remove_package(added.id).await,
            Err(PackageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn blank_name_rejected() {
        let svc = service().await;
        assert!(matches!(
            svc.add_package("   ").await,
            Err(PackageError::Validation(_))
        ));
    }
}
