//! # Supplier Infrastructure
//! 
//! Database implementations (adapters) of the supplier repository port.

pub mod database;

pub use database::{create_pool, run_migrations, InMemorySupplierRepository, PgSupplierRepository};
