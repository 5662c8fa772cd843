//! Order domain entity
//!
//! An order placed by a user and its lifecycle status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserId;

/// Unique identifier for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order status
///
/// Nominal flow is `pending -> paid -> delivery -> completed`, with `canceled`
/// reachable from any non-terminal state. Transitions are not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Delivery,
    Completed,
    Canceled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Paid => write!(f, "paid"),
            OrderStatus::Delivery => write!(f, "delivery"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Canceled => write!(f, "canceled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            "delivery" => Ok(OrderStatus::Delivery),
            "completed" => Ok(OrderStatus::Completed),
            "canceled" => Ok(OrderStatus::Canceled),
            _ => Err(format!("Unknown order status: {}", s)),
        }
    }
}

/// An order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    /// Owning user. Referential integrity is left to storage.
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Data needed to place a new order
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    /// Defaults to `pending` when absent
    pub status: Option<OrderStatus>,
}

/// Caller-supplied values for updating an order
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub id: OrderId,
    /// New owner. `None` leaves the stored owner alone.
    pub user_id: Option<UserId>,
    /// Defaults to `completed` when absent
    pub status: Option<OrderStatus>,
}

/// Resolved order update handed to storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRevision {
    pub id: OrderId,
    /// Written only when present
    pub user_id: Option<UserId>,
    pub status: OrderStatus,
    pub updated_at: DateTime<Utc>,
}
