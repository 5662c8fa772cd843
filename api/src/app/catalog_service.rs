//! Catalog service
//!
//! Product reads and category membership. Everything here delegates to the
//! product repository; only paging parameters are normalised.

use std::sync::Arc;

use crate::domain::entities::{CategoryId, Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::AppError;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

pub struct CatalogService {
    products: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub async fn get_product_by_id(&self, id: &ProductId) -> Result<Product, AppError> {
        Ok(self.products.get_product_by_id(id).await?)
    }

    /// List products. A non-positive limit becomes the default page size and
    /// a negative offset becomes zero.
    pub async fn list_products(&self, limit: i64, offset: i64) -> Result<Vec<Product>, AppError> {
        let limit = if limit < 1 { DEFAULT_PAGE_SIZE } else { limit };
        let offset = offset.max(0);

        Ok(self.products.list_products(limit, offset).await?)
    }

    pub async fn add_product_to_category(
        &self,
        category_id: &CategoryId,
        product_id: &ProductId,
    ) -> Result<(), AppError> {
        self.products
            .add_product_to_category(category_id, product_id)
            .await?;

        tracing::debug!(%category_id, %product_id, "Product added to category");
        Ok(())
    }

    pub async fn remove_product_from_category(
        &self,
        category_id: &CategoryId,
        product_id: &ProductId,
    ) -> Result<(), AppError> {
        self.products
            .remove_product_from_category(category_id, product_id)
            .await?;

        tracing::debug!(%category_id, %product_id, "Product removed from category");
        Ok(())
    }
}
