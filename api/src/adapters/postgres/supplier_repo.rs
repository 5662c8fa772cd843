//! PostgreSQL adapter for SupplierRepository

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use crate::domain::entities::{Supplier, SupplierId};
use crate::domain::ports::SupplierRepository;
use crate::entity::suppliers;
use crate::error::{DomainError, EntityKind};

/// PostgreSQL implementation of SupplierRepository
pub struct PostgresSupplierRepository {
    db: DatabaseConnection,
}

impl PostgresSupplierRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SupplierRepository for PostgresSupplierRepository {
    async fn get_supplier_by_id(&self, id: &SupplierId) -> Result<Supplier, DomainError> {
        let result = suppliers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result
            .map(Supplier::from)
            .ok_or(DomainError::NotFound(EntityKind::Supplier))
    }

    async fn delete_supplier_by_id(&self, id: &SupplierId) -> Result<(), DomainError> {
        let result = suppliers::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(EntityKind::Supplier))
        } else {
            Ok(())
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<suppliers::Model> for Supplier {
    fn from(model: suppliers::Model) -> Self {
        Supplier {
            id: SupplierId(model.id),
            name: model.name,
        }
    }
}
