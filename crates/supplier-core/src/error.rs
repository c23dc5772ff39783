//! Domain errors

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Write operation a persistence failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Supplier not found: {0}")]
    SupplierNotFound(Uuid),

    /// The store accepted the write without a fault but reported zero affected rows.
    #[error("No rows affected on supplier {0}")]
    PersistenceFailed(Operation),

    #[error("Database error: {0}")]
    Database(String),
}
