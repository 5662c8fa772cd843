//! User service
//!
//! Handles registration and profile updates. Email uniqueness is checked
//! here as a fast path; the storage constraint is what actually guarantees it.

use std::sync::Arc;

use chrono::Utc;

use super::password::PasswordHasher;
use crate::domain::entities::{NewUser, User, UserId, UserUpdate};
use crate::domain::ports::UserRepository;
use crate::error::{AppError, DomainError, EntityKind};

/// Service for managing users
pub struct UserService {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Register a new user
    ///
    /// Fails with `AlreadyExists(User)` when the email is taken. Lookup
    /// failures other than not-found are returned unchanged.
    ///
    /// Returns the stored user with its generated ID, timestamps and
    /// password hash.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        match self.users.get_by_email(&new_user.email).await {
            Ok(_) => return Err(DomainError::AlreadyExists(EntityKind::User).into()),
            Err(e) if e.is_not_found(EntityKind::User) => {}
            Err(e) => return Err(e.into()),
        }

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: new_user.name,
            email: new_user.email,
            password: self.hasher.hash(&new_user.password),
            number: new_user.number,
            address: new_user.address,
            balance: new_user.balance,
            created_at: now,
            updated_at: now,
        };

        let created = self.users.create_user(&user).await.map_err(|e| {
            if matches!(e, DomainError::AlreadyExists(_)) {
                tracing::warn!(email = %user.email, "Duplicate email rejected by storage after lookup");
            }
            e
        })?;

        tracing::info!(user_id = %created.id, "User created");
        Ok(created)
    }

    /// Update a user's profile
    ///
    /// Balance and creation time always come from the stored user. An empty
    /// password keeps the stored hash.
    pub async fn update_user(&self, update: UserUpdate) -> Result<User, AppError> {
        let existing = self.users.get_user_by_id(&update.id).await?;

        let password = match update.new_password() {
            Some(plaintext) => self.hasher.hash(plaintext),
            None => existing.password,
        };

        let user = User {
            id: update.id,
            name: update.name,
            email: update.email,
            password,
            number: update.number,
            address: update.address,
            balance: existing.balance,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        let updated = self.users.update_user(&user).await?;

        tracing::info!(user_id = %updated.id, "User updated");
        Ok(updated)
    }

    /// Find a user by ID
    pub async fn get_user_by_id(&self, id: &UserId) -> Result<User, AppError> {
        Ok(self.users.get_user_by_id(id).await?)
    }

    /// Find a user by email
    pub async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        Ok(self.users.get_by_email(email).await?)
    }

    /// List all users, ordered by ID
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.list_users().await?)
    }
}
