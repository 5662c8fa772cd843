//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory, record every call, and can be told to fail
//! specific operations so tests can verify error propagation.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Category, CategoryId, Order, OrderId, OrderRevision, Product, ProductId, Supplier, SupplierId,
    User, UserId,
};
use crate::domain::ports::{OrderRepository, ProductRepository, SupplierRepository, UserRepository};
use crate::error::{DomainError, EntityKind};

// ============================================================================
// Call log shared by all in-memory repositories
// ============================================================================

/// Records operation names and decides which of them fail
#[derive(Default, Clone)]
pub struct CallLog {
    calls: Arc<RwLock<Vec<&'static str>>>,
    failing_ops: Arc<RwLock<HashSet<&'static str>>>,
    fail_all: Arc<RwLock<bool>>,
}

impl CallLog {
    /// Record a call and return the injected failure, if any
    fn record(&self, op: &'static str) -> Result<(), DomainError> {
        self.calls.write().unwrap().push(op);

        if *self.fail_all.read().unwrap() || self.failing_ops.read().unwrap().contains(op) {
            return Err(DomainError::Database(format!("{} failed: connection refused", op)));
        }
        Ok(())
    }

    fn fail_on(&self, op: &'static str) {
        self.failing_ops.write().unwrap().insert(op);
    }

    fn fail_all(&self) {
        *self.fail_all.write().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.read().unwrap().clone()
    }

    pub fn called(&self, op: &str) -> bool {
        self.calls.read().unwrap().iter().any(|c| *c == op)
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
    /// When set, `get_by_email` never finds anything, as if another request
    /// inserted the same email between lookup and insert.
    stale_email_lookups: bool,
    log: CallLog,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.users.write().unwrap().insert(user.id, user);
        self
    }

    /// Fail the named operation with a database error
    pub fn fail_on(self, op: &'static str) -> Self {
        self.log.fail_on(op);
        self
    }

    /// Fail every operation with a database error
    pub fn failing() -> Self {
        let repo = Self::default();
        repo.log.fail_all();
        repo
    }

    pub fn with_stale_email_lookups(mut self) -> Self {
        self.stale_email_lookups = true;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.log.calls()
    }

    pub fn called(&self, op: &str) -> bool {
        self.log.called(op)
    }

    /// Current stored state of a user, bypassing the call log
    pub fn stored(&self, id: &UserId) -> Option<User> {
        self.users.read().unwrap().get(id).cloned()
    }

    pub fn count(&self) -> usize {
        self.users.read().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: &User) -> Result<User, DomainError> {
        self.log.record("create_user")?;
        let mut users = self.users.write().unwrap();

        // Mirrors the UNIQUE constraint on users.email
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::AlreadyExists(EntityKind::User));
        }

        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn get_by_email(&self, email: &str) -> Result<User, DomainError> {
        self.log.record("get_by_email")?;
        if self.stale_email_lookups {
            return Err(DomainError::NotFound(EntityKind::User));
        }

        let users = self.users.read().unwrap();
        users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(DomainError::NotFound(EntityKind::User))
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        self.log.record("get_user_by_id")?;
        let users = self.users.read().unwrap();
        users
            .get(id)
            .cloned()
            .ok_or(DomainError::NotFound(EntityKind::User))
    }

    async fn update_user(&self, user: &User) -> Result<User, DomainError> {
        self.log.record("update_user")?;
        let mut users = self.users.write().unwrap();

        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(DomainError::AlreadyExists(EntityKind::User));
        }

        let stored = users
            .get_mut(&user.id)
            .ok_or(DomainError::NotFound(EntityKind::User))?;

        // Balance and created_at are not part of the update statement
        stored.name = user.name.clone();
        stored.email = user.email.clone();
        stored.password = user.password.clone();
        stored.number = user.number.clone();
        stored.address = user.address.clone();
        stored.updated_at = user.updated_at;

        Ok(stored.clone())
    }

    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.log.record("list_users")?;
        let users = self.users.read().unwrap();
        Ok(users.values().cloned().collect())
    }
}

// ============================================================================
// In-Memory Order Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<BTreeMap<OrderId, Order>>>,
    log: CallLog,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an order for testing
    pub fn with_order(self, order: Order) -> Self {
        self.orders.write().unwrap().insert(order.id, order);
        self
    }

    pub fn fail_on(self, op: &'static str) -> Self {
        self.log.fail_on(op);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.log.calls()
    }

    pub fn called(&self, op: &str) -> bool {
        self.log.called(op)
    }

    pub fn stored(&self, id: &OrderId) -> Option<Order> {
        self.orders.read().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create_order(&self, order: &Order) -> Result<Order, DomainError> {
        self.log.record("create_order")?;
        self.orders.write().unwrap().insert(order.id, order.clone());
        Ok(order.clone())
    }

    async fn get_order_by_id(&self, id: &OrderId) -> Result<Order, DomainError> {
        self.log.record("get_order_by_id")?;
        let orders = self.orders.read().unwrap();
        orders
            .get(id)
            .cloned()
            .ok_or(DomainError::NotFound(EntityKind::Order))
    }

    async fn update_order(&self, revision: &OrderRevision) -> Result<Order, DomainError> {
        self.log.record("update_order")?;
        let mut orders = self.orders.write().unwrap();
        let stored = orders
            .get_mut(&revision.id)
            .ok_or(DomainError::NotFound(EntityKind::Order))?;

        if let Some(user_id) = revision.user_id {
            stored.user_id = user_id;
        }
        stored.status = revision.status;
        stored.updated_at = revision.updated_at;

        Ok(stored.clone())
    }
}

// ============================================================================
// In-Memory Product Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<ProductId, Product>>>,
    categories: Arc<RwLock<BTreeMap<CategoryId, Category>>>,
    /// Last (limit, offset) passed to `list_products`
    last_page: Arc<RwLock<Option<(i64, i64)>>>,
    log: CallLog,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(self, product: Product) -> Self {
        self.products.write().unwrap().insert(product.id, product);
        self
    }

    pub fn with_category(self, category: Category) -> Self {
        self.categories
            .write()
            .unwrap()
            .insert(category.id, category);
        self
    }

    pub fn fail_on(self, op: &'static str) -> Self {
        self.log.fail_on(op);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.log.calls()
    }

    pub fn last_page(&self) -> Option<(i64, i64)> {
        *self.last_page.read().unwrap()
    }

    pub fn stored(&self, id: &ProductId) -> Option<Product> {
        self.products.read().unwrap().get(id).cloned()
    }

    fn ensure_category(&self, id: &CategoryId) -> Result<(), DomainError> {
        if self.categories.read().unwrap().contains_key(id) {
            Ok(())
        } else {
            Err(DomainError::NotFound(EntityKind::Category))
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_product_by_id(&self, id: &ProductId) -> Result<Product, DomainError> {
        self.log.record("get_product_by_id")?;
        let products = self.products.read().unwrap();
        products
            .get(id)
            .cloned()
            .ok_or(DomainError::NotFound(EntityKind::Product))
    }

    async fn list_products(&self, limit: i64, offset: i64) -> Result<Vec<Product>, DomainError> {
        self.log.record("list_products")?;
        *self.last_page.write().unwrap() = Some((limit, offset));

        let products = self.products.read().unwrap();
        Ok(products
            .values()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn add_product_to_category(
        &self,
        category_id: &CategoryId,
        product_id: &ProductId,
    ) -> Result<(), DomainError> {
        self.log.record("add_product_to_category")?;
        self.ensure_category(category_id)?;

        let mut products = self.products.write().unwrap();
        let product = products
            .get_mut(product_id)
            .ok_or(DomainError::NotFound(EntityKind::Product))?;
        product.category_id = Some(*category_id);
        Ok(())
    }

    async fn remove_product_from_category(
        &self,
        category_id: &CategoryId,
        product_id: &ProductId,
    ) -> Result<(), DomainError> {
        self.log.record("remove_product_from_category")?;
        self.ensure_category(category_id)?;

        let mut products = self.products.write().unwrap();
        match products.get_mut(product_id) {
            Some(product) if product.category_id == Some(*category_id) => {
                product.category_id = None;
                Ok(())
            }
            _ => Err(DomainError::NotFound(EntityKind::Product)),
        }
    }
}

// ============================================================================
// In-Memory Supplier Repository
// ============================================================================

#[derive(Default)]
pub struct InMemorySupplierRepository {
    suppliers: Arc<RwLock<BTreeMap<SupplierId, Supplier>>>,
    log: CallLog,
}

impl InMemorySupplierRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_supplier(self, supplier: Supplier) -> Self {
        self.suppliers
            .write()
            .unwrap()
            .insert(supplier.id, supplier);
        self
    }

    pub fn fail_on(self, op: &'static str) -> Self {
        self.log.fail_on(op);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.log.calls()
    }

    pub fn contains(&self, id: &SupplierId) -> bool {
        self.suppliers.read().unwrap().contains_key(id)
    }
}

#[async_trait]
impl SupplierRepository for InMemorySupplierRepository {
    async fn get_supplier_by_id(&self, id: &SupplierId) -> Result<Supplier, DomainError> {
        self.log.record("get_supplier_by_id")?;
        let suppliers = self.suppliers.read().unwrap();
        suppliers
            .get(id)
            .cloned()
            .ok_or(DomainError::NotFound(EntityKind::Supplier))
    }

    async fn delete_supplier_by_id(&self, id: &SupplierId) -> Result<(), DomainError> {
        self.log.record("delete_supplier_by_id")?;
        match self.suppliers.write().unwrap().remove(id) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound(EntityKind::Supplier)),
        }
    }
}
