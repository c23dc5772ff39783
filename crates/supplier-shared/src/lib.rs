//! # Supplier Shared
//! 
//! Shared configuration, telemetry, types and messages for the supplier service.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
