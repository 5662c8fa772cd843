//! PostgreSQL adapter for UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};

use crate::domain::entities::{User, UserId};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::{DomainError, EntityKind};

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map a write error, turning the users.email unique violation into
/// `AlreadyExists(User)` and a missing row into `NotFound(User)`.
fn write_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::AlreadyExists(EntityKind::User),
        _ => match e {
            DbErr::RecordNotUpdated => DomainError::NotFound(EntityKind::User),
            e => DomainError::Database(e.to_string()),
        },
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: &User) -> Result<User, DomainError> {
        let model = users::ActiveModel {
            id: Set(user.id.0),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
            number: Set(user.number.clone()),
            address: Set(user.address.clone()),
            balance: Set(user.balance),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        };

        let result = model.insert(&self.db).await.map_err(write_err)?;

        Ok(result.into())
    }

    async fn get_by_email(&self, email: &str) -> Result<User, DomainError> {
        let result = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result
            .map(User::from)
            .ok_or(DomainError::NotFound(EntityKind::User))
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<User, DomainError> {
        let result = users::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result
            .map(User::from)
            .ok_or(DomainError::NotFound(EntityKind::User))
    }

    async fn update_user(&self, user: &User) -> Result<User, DomainError> {
        // balance and created_at stay NotSet so the statement never touches them
        let result = users::ActiveModel {
            id: Set(user.id.0),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
            number: Set(user.number.clone()),
            address: Set(user.address.clone()),
            updated_at: Set(user.updated_at.fixed_offset()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(write_err)?;

        Ok(result.into())
    }

    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let results = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: UserId(model.id),
            name: model.name,
            email: model.email,
            password: model.password,
            number: model.number,
            address: model.address,
            balance: model.balance,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
