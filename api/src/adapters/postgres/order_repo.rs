//! PostgreSQL adapter for OrderRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, Set};

use crate::domain::entities::{Order, OrderId, OrderRevision, OrderStatus, UserId};
use crate::domain::ports::OrderRepository;
use crate::entity::orders;
use crate::error::{DomainError, EntityKind};

/// PostgreSQL implementation of OrderRepository
pub struct PostgresOrderRepository {
    db: DatabaseConnection,
}

impl PostgresOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create_order(&self, order: &Order) -> Result<Order, DomainError> {
        let model = orders::ActiveModel {
            id: Set(order.id.0),
            user_id: Set(order.user_id.0),
            created_at: Set(order.created_at.fixed_offset()),
            updated_at: Set(order.updated_at.fixed_offset()),
            status: Set(order.status.to_string()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.try_into()
    }

    async fn get_order_by_id(&self, id: &OrderId) -> Result<Order, DomainError> {
        let result = orders::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result
            .ok_or(DomainError::NotFound(EntityKind::Order))?
            .try_into()
    }

    async fn update_order(&self, revision: &OrderRevision) -> Result<Order, DomainError> {
        let result = orders::ActiveModel {
            id: Set(revision.id.0),
            user_id: revision.user_id.map_or(NotSet, |id| Set(id.0)),
            status: Set(revision.status.to_string()),
            updated_at: Set(revision.updated_at.fixed_offset()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::NotFound(EntityKind::Order),
            e => DomainError::Database(e.to_string()),
        })?;

        result.try_into()
    }
}

/// Convert SeaORM model to domain entity. Fails on a status string the
/// domain does not know.
impl TryFrom<orders::Model> for Order {
    type Error = DomainError;

    fn try_from(model: orders::Model) -> Result<Self, Self::Error> {
        let status: OrderStatus = model.status.parse().map_err(DomainError::Database)?;

        Ok(Order {
            id: OrderId(model.id),
            user_id: UserId(model.user_id),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
            status,
        })
    }
}
