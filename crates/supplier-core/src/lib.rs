//! # Supplier Core
//! 
//! Domain entity, validation schema, repository port and CRUD service for suppliers.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{DomainError, Operation};
