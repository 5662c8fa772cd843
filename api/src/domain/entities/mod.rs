//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod order;
pub mod product;
pub mod supplier;
pub mod user;

pub use order::{NewOrder, Order, OrderId, OrderRevision, OrderStatus, OrderUpdate};
pub use product::{Category, CategoryId, Product, ProductId};
pub use supplier::{Supplier, SupplierId};
pub use user::{NewUser, User, UserId, UserUpdate};
