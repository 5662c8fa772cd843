//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).
//!
//! Lookups report a missing row as `DomainError::NotFound` for the entity
//! involved, so services never have to re-derive absence themselves.

use async_trait::async_trait;

use crate::domain::entities::{
    CategoryId, Order, OrderId, OrderRevision, Product, ProductId, Supplier, SupplierId, User,
    UserId,
};
use crate::error::DomainError;

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a fully populated user and return the stored row.
    ///
    /// Storage enforces email uniqueness; a violation is reported as
    /// `AlreadyExists(User)`.
    async fn create_user(&self, user: &User) -> Result<User, DomainError>;

    /// Find a user by email
    async fn get_by_email(&self, email: &str) -> Result<User, DomainError>;

    /// Find a user by ID
    async fn get_user_by_id(&self, id: &UserId) -> Result<User, DomainError>;

    /// Overwrite name, email, password, number, address and updated_at.
    /// Balance and created_at are never written here.
    async fn update_user(&self, user: &User) -> Result<User, DomainError>;

    /// All users ordered by ID ascending
    async fn list_users(&self) -> Result<Vec<User>, DomainError>;
}

/// Repository for Product entities and their category association
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by ID
    async fn get_product_by_id(&self, id: &ProductId) -> Result<Product, DomainError>;

    /// A page of products ordered by ID ascending
    async fn list_products(&self, limit: i64, offset: i64) -> Result<Vec<Product>, DomainError>;

    /// Attach a product to a category
    async fn add_product_to_category(
        &self,
        category_id: &CategoryId,
        product_id: &ProductId,
    ) -> Result<(), DomainError>;

    /// Detach a product from a category it currently belongs to
    async fn remove_product_from_category(
        &self,
        category_id: &CategoryId,
        product_id: &ProductId,
    ) -> Result<(), DomainError>;
}

/// Repository for Order entities
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a fully populated order and return the stored row
    async fn create_order(&self, order: &Order) -> Result<Order, DomainError>;

    /// Find an order by ID
    async fn get_order_by_id(&self, id: &OrderId) -> Result<Order, DomainError>;

    /// Apply a revision and return the stored row
    async fn update_order(&self, revision: &OrderRevision) -> Result<Order, DomainError>;
}

/// Repository for Supplier entities
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// Find a supplier by ID
    async fn get_supplier_by_id(&self, id: &SupplierId) -> Result<Supplier, DomainError>;

    /// Delete a supplier; `NotFound(Supplier)` when no row was affected
    async fn delete_supplier_by_id(&self, id: &SupplierId) -> Result<(), DomainError>;
}
