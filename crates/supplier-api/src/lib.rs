//! # Supplier API
//! 
//! HTTP handlers, router, error mapping and response bodies.

pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
