// ============================================================================
// Supplier Infrastructure - PostgreSQL Supplier Repository
// File: crates/supplier-infrastructure/src/database/postgres/supplier_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{PgPool, FromRow};
use uuid::Uuid;
use tracing::{debug, error};
use chrono::{DateTime, Utc};

use supplier_core::domain::Supplier;
use supplier_core::error::DomainError;
use supplier_core::repositories::SupplierRepository;

pub struct PgSupplierRepository {
    pool: PgPool,
}

impl PgSupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct SupplierRow {
    pub id: Uuid,
    pub name: String,
    pub document: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Supplier {
            id: row.id,
            name: row.name,
            document: row.document,
            active: row.active,
            created_at: row.created_at,
            modified_at: row.modified_at,
        }
    }
}

fn database_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::Database(e.to_string())
}

#[async_trait]
impl SupplierRepository for PgSupplierRepository {
    async fn find_all(&self) -> Result<Vec<Supplier>, DomainError> {
        let rows: Vec<SupplierRow> = sqlx::query_as(
            r#"
            SELECT id, name, document, active, created_at, modified_at
            FROM suppliers
            ORDER BY created_at, id
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("listing suppliers", e))?;

        debug!("Loaded {} suppliers", rows.len());
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Supplier>, DomainError> {
        let row: Option<SupplierRow> = sqlx::query_as(
            r#"
            SELECT id, name, document, active, created_at, modified_at
            FROM suppliers
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("finding supplier by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn insert(&self, supplier: &Supplier) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO suppliers (id, name, document, active, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#
        )
        .bind(supplier.id)
        .bind(&supplier.name)
        .bind(&supplier.document)
        .bind(supplier.active)
        .bind(supplier.created_at)
        .bind(supplier.modified_at)
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("creating supplier", e))?;

        Ok(result.rows_affected())
    }

    async fn update(&self, supplier: &Supplier) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE suppliers
            SET
                name = $2,
                document = $3,
                active = $4,
                modified_at = $5
            WHERE id = $1
            "#
        )
        .bind(supplier.id)
        .bind(&supplier.name)
        .bind(&supplier.document)
        .bind(supplier.active)
        .bind(supplier.modified_at)
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("updating supplier", e))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("deleting supplier", e))?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("pinging database", e))?;
        Ok(())
    }
}
