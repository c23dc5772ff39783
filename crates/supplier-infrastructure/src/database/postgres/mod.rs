//! PostgreSQL repository implementations

pub mod supplier_repo_impl;

pub use supplier_repo_impl::PgSupplierRepository;
