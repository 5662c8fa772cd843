//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services apply business rules on top of the repository ports.

pub mod catalog_service;
pub mod order_service;
pub mod password;
pub mod supplier_service;
pub mod user_service;

pub use catalog_service::CatalogService;
pub use order_service::OrderService;
pub use password::PasswordHasher;
pub use supplier_service::SupplierService;
pub use user_service::UserService;
