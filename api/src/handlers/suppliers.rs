//! Supplier handlers

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{Supplier, SupplierId};
use crate::error::AppError;
use crate::handlers::MessageResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SupplierResponse {
    pub id: String,
    pub name: String,
}

impl From<Supplier> for SupplierResponse {
    fn from(supplier: Supplier) -> Self {
        SupplierResponse {
            id: supplier.id.to_string(),
            name: supplier.name,
        }
    }
}

/// GET /suppliers/:id
pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SupplierResponse>, AppError> {
    let supplier = state
        .supplier_service
        .get_supplier_by_id(&SupplierId(id))
        .await?;

    Ok(Json(supplier.into()))
}

/// DELETE /suppliers/:id
pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .supplier_service
        .delete_supplier_by_id(&SupplierId(id))
        .await?;

    Ok(Json(MessageResponse::new(format!("Supplier {} deleted", id))))
}
