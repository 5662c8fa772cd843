//! Order service
//!
//! Creates orders and moves them between statuses. Transition legality is
//! not checked; only the default status differs between create and update.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{NewOrder, Order, OrderId, OrderRevision, OrderStatus, OrderUpdate};
use crate::domain::ports::OrderRepository;
use crate::error::{AppError, DomainError, EntityKind};

/// Service for managing orders
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    /// Place a new order. Status defaults to `pending`.
    pub async fn create_order(&self, new_order: NewOrder) -> Result<Order, AppError> {
        let now = Utc::now();
        let order = Order {
            id: OrderId::new(),
            user_id: new_order.user_id,
            created_at: now,
            updated_at: now,
            status: new_order.status.unwrap_or(OrderStatus::Pending),
        };

        let created = self.orders.create_order(&order).await?;

        tracing::info!(order_id = %created.id, user_id = %created.user_id, status = %created.status, "Order created");
        Ok(created)
    }

    /// Find an order by ID
    pub async fn get_order_by_id(&self, id: &OrderId) -> Result<Order, AppError> {
        Ok(self.orders.get_order_by_id(id).await?)
    }

    /// Update an order. Status defaults to `completed`.
    ///
    /// The stored order is fetched only to confirm it exists; what gets
    /// written is the caller's input plus the status default and a fresh
    /// `updated_at`. A missing update fails with `NotFound(Order)` before
    /// storage is touched.
    pub async fn update_order(&self, update: Option<OrderUpdate>) -> Result<Order, AppError> {
        let update = update.ok_or(DomainError::NotFound(EntityKind::Order))?;

        self.orders.get_order_by_id(&update.id).await?;

        let revision = OrderRevision {
            id: update.id,
            user_id: update.user_id,
            status: update.status.unwrap_or(OrderStatus::Completed),
            updated_at: Utc::now(),
        };

        let updated = self.orders.update_order(&revision).await?;

        tracing::info!(order_id = %updated.id, status = %updated.status, "Order updated");
        Ok(updated)
    }
}
