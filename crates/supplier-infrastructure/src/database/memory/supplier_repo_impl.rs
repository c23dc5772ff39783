//! In-memory supplier repository, selected with `database.url = "memory://"`

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use supplier_core::domain::Supplier;
use supplier_core::error::DomainError;
use supplier_core::repositories::SupplierRepository;

/// Keeps suppliers in insertion order. Writes behave like single-row
/// statements: a write that matches nothing reports zero affected rows.
#[derive(Default)]
pub struct InMemorySupplierRepository {
    suppliers: RwLock<Vec<Supplier>>,
}

impl InMemorySupplierRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SupplierRepository for InMemorySupplierRepository {
    async fn find_all(&self) -> Result<Vec<Supplier>, DomainError> {
        Ok(self.suppliers.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Supplier>, DomainError> {
        let suppliers = self.suppliers.read().await;
        Ok(suppliers.iter().find(|s| s.id == id).cloned())
    }

    async fn insert(&self, supplier: &Supplier) -> Result<u64, DomainError> {
        let mut suppliers = self.suppliers.write().await;
        // primary key
        if suppliers.iter().any(|s| s.id == supplier.id) {
            return Err(DomainError::Database(format!(
                "duplicate key value violates unique constraint: id={}",
                supplier.id
            )));
        }
        suppliers.push(supplier.clone());
        Ok(1)
    }

    async fn update(&self, supplier: &Supplier) -> Result<u64, DomainError> {
        let mut suppliers = self.suppliers.write().await;
        match suppliers.iter_mut().find(|s| s.id == supplier.id) {
            Some(stored) => {
                *stored = supplier.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64, DomainError> {
        let mut suppliers = self.suppliers.write().await;
        let before = suppliers.len();
        suppliers.retain(|s| s.id != id);
        Ok((before - suppliers.len()) as u64)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use supplier_core::domain::SupplierChanges;

    fn supplier(name: &str) -> Supplier {
        Supplier::new(SupplierChanges {
            name: name.to_string(),
            document: "123".to_string(),
            active: true,
        })
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemorySupplierRepository::new();
        for name in ["a", "b", "c"] {
            assert_eq!(repo.insert(&supplier(name)).await.unwrap(), 1);
        }

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_a_fault() {
        let repo = InMemorySupplierRepository::new();
        let s = supplier("a");
        repo.insert(&s).await.unwrap();
        assert!(repo.insert(&s).await.is_err());
    }

    #[tokio::test]
    async fn test_writes_on_missing_rows_affect_nothing() {
        let repo = InMemorySupplierRepository::new();
        let s = supplier("ghost");
        assert_eq!(repo.update(&s).await.unwrap(), 0);
        assert_eq!(repo.delete(s.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = InMemorySupplierRepository::new();
        let mut s = supplier("a");
        repo.insert(&s).await.unwrap();

        s.name = "b".to_string();
        assert_eq!(repo.update(&s).await.unwrap(), 1);
        assert_eq!(repo.find_by_id(s.id).await.unwrap().unwrap().name, "b");

        assert_eq!(repo.delete(s.id).await.unwrap(), 1);
        assert!(repo.find_by_id(s.id).await.unwrap().is_none());
    }
}
