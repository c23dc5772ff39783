//! Repository traits (ports)

pub mod supplier_repository;

pub use supplier_repository::SupplierRepository;

#[cfg(test)]
pub use supplier_repository::MockSupplierRepository;
