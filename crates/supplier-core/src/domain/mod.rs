//! # Supplier Core - Domain Module

pub mod supplier;

pub use supplier::{Supplier, SupplierChanges, SupplierPayload};
