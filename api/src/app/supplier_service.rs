//! Supplier service

use std::sync::Arc;

use crate::domain::entities::{Supplier, SupplierId};
use crate::domain::ports::SupplierRepository;
use crate::error::AppError;

pub struct SupplierService {
    suppliers: Arc<dyn SupplierRepository>,
}

impl SupplierService {
    pub fn new(suppliers: Arc<dyn SupplierRepository>) -> Self {
        Self { suppliers }
    }

    pub async fn get_supplier_by_id(&self, id: &SupplierId) -> Result<Supplier, AppError> {
        Ok(self.suppliers.get_supplier_by_id(id).await?)
    }

    /// Delete a supplier. Fails with `NotFound(Supplier)` when nothing was deleted.
    pub async fn delete_supplier_by_id(&self, id: &SupplierId) -> Result<(), AppError> {
        self.suppliers.delete_supplier_by_id(id).await?;

        tracing::info!(supplier_id = %id, "Supplier deleted");
        Ok(())
    }
}
