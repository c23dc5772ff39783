// ============================================================================
// Supplier Core - Supplier Service
// File: crates/supplier-core/src/services/supplier_service.rs
// ============================================================================
//! CRUD flows over the supplier repository

use std::sync::Arc;
use uuid::Uuid;
use tracing::{info, warn};

use crate::domain::{Supplier, SupplierChanges};
use crate::error::{DomainError, Operation};
use crate::repositories::SupplierRepository;

/// Supplier service. Inputs are already validated `SupplierChanges`, so no
/// write is ever attempted with an invalid record.
pub struct SupplierService<R: SupplierRepository + ?Sized> {
    supplier_repo: Arc<R>,
}

impl<R: SupplierRepository + ?Sized> Clone for SupplierService<R> {
    fn clone(&self) -> Self {
        Self {
            supplier_repo: self.supplier_repo.clone(),
        }
    }
}

impl<R: SupplierRepository + ?Sized> SupplierService<R> {
    pub fn new(supplier_repo: Arc<R>) -> Self {
        Self { supplier_repo }
    }

    /// All suppliers in store order
    pub async fn list(&self) -> Result<Vec<Supplier>, DomainError> {
        self.supplier_repo.find_all().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Supplier, DomainError> {
        self.supplier_repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::SupplierNotFound(id))
    }

    /// Create a supplier with a server-generated id
    pub async fn create(&self, changes: SupplierChanges) -> Result<Supplier, DomainError> {
        let supplier = Supplier::new(changes);

        let affected = self.supplier_repo.insert(&supplier).await?;
        if affected == 0 {
            warn!("Insert of supplier {} affected no rows", supplier.id);
            return Err(DomainError::PersistenceFailed(Operation::Create));
        }

        info!("Supplier created: {}", supplier.id);
        Ok(supplier)
    }

    /// Replace name, document and active on an existing supplier
    pub async fn update(&self, id: Uuid, changes: SupplierChanges) -> Result<Supplier, DomainError> {
        let mut supplier = self.get(id).await?;

        supplier.apply(changes);

        let affected = self.supplier_repo.update(&supplier).await?;
        if affected == 0 {
            warn!("Update of supplier {} affected no rows", id);
            return Err(DomainError::PersistenceFailed(Operation::Update));
        }

        info!("Supplier updated: {}", id);
        Ok(supplier)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let supplier = self.get(id).await?;

        let affected = self.supplier_repo.delete(supplier.id).await?;
        if affected == 0 {
            warn!("Delete of supplier {} affected no rows", id);
            return Err(DomainError::PersistenceFailed(Operation::Delete));
        }

        info!("Supplier deleted: {}", id);
        Ok(())
    }

    /// Store reachability, for readiness probes
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.supplier_repo.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockSupplierRepository;
    use mockall::predicate::eq;

    fn changes(name: &str, document: &str, active: bool) -> SupplierChanges {
        SupplierChanges {
            name: name.to_string(),
            document: document.to_string(),
            active,
        }
    }

    fn service(repo: MockSupplierRepository) -> SupplierService<MockSupplierRepository> {
        SupplierService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_inserts_new_record() {
        let mut repo = MockSupplierRepository::new();
        repo.expect_insert()
            .withf(|s: &Supplier| s.name == "Acme" && s.document == "12345" && !s.active)
            .times(1)
            .returning(|_| Ok(1));

        let created = service(repo).create(changes("Acme", "12345", false)).await.unwrap();
        assert_eq!(created.name, "Acme");
        assert!(!created.id.is_nil());
    }

    #[tokio::test]
    async fn test_create_with_zero_rows_fails() {
        let mut repo = MockSupplierRepository::new();
        repo.expect_insert().returning(|_| Ok(0));

        let err = service(repo).create(changes("Acme", "1", true)).await.unwrap_err();
        assert!(matches!(err, DomainError::PersistenceFailed(Operation::Create)));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let id = Uuid::new_v4();
        let mut repo = MockSupplierRepository::new();
        repo.expect_find_by_id().with(eq(id)).returning(|_| Ok(None));

        let err = service(repo).get(id).await.unwrap_err();
        assert!(matches!(err, DomainError::SupplierNotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_update_missing_never_writes() {
        let mut repo = MockSupplierRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let err = service(repo)
            .update(Uuid::new_v4(), changes("X", "Y", true))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::SupplierNotFound(_)));
    }

    #[tokio::test]
    async fn test_update_overwrites_fields_and_keeps_id() {
        let existing = Supplier::new(changes("Acme", "12345", false));
        let id = existing.id;

        let mut repo = MockSupplierRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update()
            .withf(move |s: &Supplier| s.id == id && s.name == "Acme Ltda" && s.active)
            .times(1)
            .returning(|_| Ok(1));

        let updated = service(repo)
            .update(id, changes("Acme Ltda", "54321", true))
            .await
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.document, "54321");
        assert!(updated.modified_at.is_some());
    }

    #[tokio::test]
    async fn test_update_with_zero_rows_fails() {
        let existing = Supplier::new(changes("Acme", "1", false));
        let mut repo = MockSupplierRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update().returning(|_| Ok(0));

        let err = service(repo)
            .update(Uuid::new_v4(), changes("A", "B", false))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PersistenceFailed(Operation::Update)));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockSupplierRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_delete().never();

        let err = service(repo).delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::SupplierNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let existing = Supplier::new(changes("Acme", "1", false));
        let id = existing.id;
        let mut repo = MockSupplierRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_delete().with(eq(id)).times(1).returning(|_| Ok(1));

        service(repo).delete(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_with_zero_rows_fails() {
        let existing = Supplier::new(changes("Acme", "1", false));
        let mut repo = MockSupplierRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_delete().returning(|_| Ok(0));

        let err = service(repo).delete(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::PersistenceFailed(Operation::Delete)));
    }

    #[tokio::test]
    async fn test_database_fault_propagates() {
        let mut repo = MockSupplierRepository::new();
        repo.expect_find_all()
            .returning(|| Err(DomainError::Database("connection refused".into())));

        let err = service(repo).list().await.unwrap_err();
        assert!(matches!(err, DomainError::Database(_)));
    }
}
