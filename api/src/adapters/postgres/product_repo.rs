//! PostgreSQL adapter for ProductRepository
//!
//! Category membership is the nullable `products.category_id` column.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::domain::entities::{Category, CategoryId, Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::entity::{categories, products};
use crate::error::{DomainError, EntityKind};

/// PostgreSQL implementation of ProductRepository
pub struct PostgresProductRepository {
    db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_category(&self, id: &CategoryId) -> Result<Category, DomainError> {
        let result = categories::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result
            .map(Category::from)
            .ok_or(DomainError::NotFound(EntityKind::Category))
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn get_product_by_id(&self, id: &ProductId) -> Result<Product, DomainError> {
        let result = products::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result
            .map(Product::from)
            .ok_or(DomainError::NotFound(EntityKind::Product))
    }

    async fn list_products(&self, limit: i64, offset: i64) -> Result<Vec<Product>, DomainError> {
        let results = products::Entity::find()
            .order_by_asc(products::Column::Id)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn add_product_to_category(
        &self,
        category_id: &CategoryId,
        product_id: &ProductId,
    ) -> Result<(), DomainError> {
        let category = self.find_category(category_id).await?;

        let result = products::Entity::update_many()
            .col_expr(products::Column::CategoryId, Expr::value(category.id.0))
            .filter(products::Column::Id.eq(product_id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(EntityKind::Product));
        }

        tracing::debug!(category = %category.name, %product_id, "Category membership changed");
        Ok(())
    }

    async fn remove_product_from_category(
        &self,
        category_id: &CategoryId,
        product_id: &ProductId,
    ) -> Result<(), DomainError> {
        let category = self.find_category(category_id).await?;

        let result = products::Entity::update_many()
            .col_expr(products::Column::CategoryId, Expr::value(Option::<Uuid>::None))
            .filter(products::Column::Id.eq(product_id.0))
            .filter(products::Column::CategoryId.eq(category.id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(EntityKind::Product));
        }

        tracing::debug!(category = %category.name, %product_id, "Category membership changed");
        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Product {
            id: ProductId(model.id),
            name: model.name,
            price: model.price,
            sku: model.sku,
            amount: model.amount,
            category_id: model.category_id.map(CategoryId),
        }
    }
}


/// Convert SeaORM model to domain entity
impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Category {
            id: CategoryId(model.id),
            name: model.name,
            display_order: model.display_order,
        }
    }
}
