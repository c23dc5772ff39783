// ============================================================================
// Supplier API - Supplier Handlers
// File: crates/supplier-api/src/handlers/supplier.rs
// ============================================================================
//! Supplier CRUD handlers mounted under `/fornecedor`

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use supplier_core::domain::{Supplier, SupplierPayload};
use supplier_shared::{constants::MSG_SUPPLIER_DELETED, supplier_location};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /fornecedor
pub async fn list_suppliers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Supplier>>, ApiError> {
    let suppliers = state.supplier_service.list().await?;
    Ok(Json(suppliers))
}

/// GET /fornecedor/{id}
pub async fn get_supplier(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Supplier>, ApiError> {
    let Path(id) = id?;
    let supplier = state.supplier_service.get(id).await?;
    Ok(Json(supplier))
}

/// POST /fornecedor
pub async fn create_supplier(
    State(state): State<AppState>,
    payload: Result<Json<SupplierPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let changes = payload.into_changes()?;

    let supplier = state.supplier_service.create(changes).await?;
    let location = supplier_location(&supplier.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(supplier)))
}

/// PUT /fornecedor
pub async fn update_supplier(
    State(state): State<AppState>,
    payload: Result<Json<SupplierPayload>, JsonRejection>,
) -> Result<Json<Supplier>, ApiError> {
    let Json(payload) = payload?;
    let (id, changes) = payload.into_update()?;

    let supplier = state.supplier_service.update(id, changes).await?;
    Ok(Json(supplier))
}

/// DELETE /fornecedor/{id}
pub async fn delete_supplier(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let Path(id) = id?;
    state.supplier_service.delete(id).await?;
    Ok(Json(MSG_SUPPLIER_DELETED))
}
