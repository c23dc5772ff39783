//! Shared handler state

use std::sync::Arc;

use supplier_core::repositories::SupplierRepository;
use supplier_core::services::SupplierService;
use supplier_shared::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub supplier_service: SupplierService<dyn SupplierRepository>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(supplier_repo: Arc<dyn SupplierRepository>, config: AppConfig) -> Self {
        Self {
            supplier_service: SupplierService::new(supplier_repo),
            config,
        }
    }
}
