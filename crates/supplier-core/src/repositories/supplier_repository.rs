//! Supplier repository trait (port)

use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::Supplier;
use crate::error::DomainError;

/// Persistence context for suppliers. Write operations report the number of
/// affected rows; a fault is only ever surfaced as `Err`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Supplier>, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Supplier>, DomainError>;
    async fn insert(&self, supplier: &Supplier) -> Result<u64, DomainError>;
    async fn update(&self, supplier: &Supplier) -> Result<u64, DomainError>;
    async fn delete(&self, id: Uuid) -> Result<u64, DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}
