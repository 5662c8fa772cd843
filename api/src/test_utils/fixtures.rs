//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{Duration, Utc};

use crate::app::PasswordHasher;
use crate::domain::entities::{
    Category, CategoryId, NewUser, Order, OrderId, OrderStatus, Product, ProductId, Supplier,
    SupplierId, User, UserId,
};

pub const TEST_SALT: &str = "test-salt";

/// Hasher configured with the test salt
pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(TEST_SALT)
}

/// Registration input matching the "arnur" scenario
pub fn test_new_user() -> NewUser {
    NewUser {
        name: "arnur".to_string(),
        email: "qwe@qwe.qwe".to_string(),
        password: "qwe".to_string(),
        number: "123123123".to_string(),
        address: "the capella".to_string(),
        balance: 100,
    }
}

/// Registration input with a specific email
pub fn test_new_user_with_email(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        ..test_new_user()
    }
}

/// Create a stored user with default values.
/// Timestamps are an hour in the past so updates are observable.
pub fn test_user() -> User {
    let created = Utc::now() - Duration::hours(1);
    User {
        id: UserId::new(),
        name: "arnur".to_string(),
        email: "qwe@qwe.qwe".to_string(),
        password: test_hasher().hash("qwe"),
        number: "123123123".to_string(),
        address: "the capella".to_string(),
        balance: 100,
        created_at: created,
        updated_at: created,
    }
}

/// Create a stored user with a specific email
pub fn test_user_with_email(email: &str) -> User {
    User {
        email: email.to_string(),
        ..test_user()
    }
}

/// Create a stored order for a user
pub fn test_order(user_id: UserId) -> Order {
    let created = Utc::now() - Duration::hours(1);
    Order {
        id: OrderId::new(),
        user_id,
        created_at: created,
        updated_at: created,
        status: OrderStatus::Pending,
    }
}

/// Create a product with a given name, not in any category
pub fn test_product(name: &str) -> Product {
    Product {
        id: ProductId::new(),
        name: name.to_string(),
        price: 1500,
        sku: format!("SKU-{}", name.to_uppercase()),
        amount: 10,
        category_id: None,
    }
}

pub fn test_category() -> Category {
    Category {
        id: CategoryId::new(),
        name: "Electronics".to_string(),
        display_order: 1,
    }
}

pub fn test_supplier() -> Supplier {
    Supplier {
        id: SupplierId::new(),
        name: "Test Supplier".to_string(),
    }
}
