//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod order_repo;
pub mod product_repo;
pub mod schema;
pub mod supplier_repo;
pub mod user_repo;


pub use order_repo::PostgresOrderRepository;
pub use product_repo::PostgresProductRepository;
pub use schema::ensure_schema;
pub use supplier_repo::PostgresSupplierRepository;
pub use user_repo::PostgresUserRepository;
