//! Product and category handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::catalog_service::DEFAULT_PAGE_SIZE;
use crate::domain::entities::{CategoryId, Product, ProductId};
use crate::error::AppError;
use crate::handlers::MessageResponse;
use crate::AppState;

/// Query parameters for listing products
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub sku: String,
    pub amount: i64,
    pub category_id: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.to_string(),
            name: product.name,
            price: product.price,
            sku: product.sku,
            amount: product.amount,
            category_id: product.category_id.map(|id| id.to_string()),
        }
    }
}

/// GET /products
///
/// List products ordered by ID.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state
        .catalog_service
        .list_products(query.limit, query.offset)
        .await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state
        .catalog_service
        .get_product_by_id(&ProductId(id))
        .await?;

    Ok(Json(product.into()))
}

/// POST /categories/:id/products/:product_id
pub async fn add_product_to_category(
    State(state): State<AppState>,
    Path((category_id, product_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .catalog_service
        .add_product_to_category(&CategoryId(category_id), &ProductId(product_id))
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "Product {} added to category {}",
        product_id, category_id
    ))))
}

/// DELETE /categories/:id/products/:product_id
pub async fn remove_product_from_category(
    State(state): State<AppState>,
    Path((category_id, product_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .catalog_service
        .remove_product_from_category(&CategoryId(category_id), &ProductId(product_id))
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "Product {} removed from category {}",
        product_id, category_id
    ))))
}
