//! Domain services (business logic)

pub mod supplier_service;

pub use supplier_service::SupplierService;
