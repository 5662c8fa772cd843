//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

use serde::Serialize;

pub mod orders;
pub mod products;
pub mod suppliers;
pub mod users;

pub use orders::{create_order, get_order, update_order};
pub use products::{
    add_product_to_category, get_product, list_products, remove_product_from_category,
};
pub use suppliers::{delete_supplier, get_supplier};
pub use users::{create_user, get_user, get_user_by_email, list_users, update_user};

/// Plain acknowledgement body for operations with nothing else to return
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
