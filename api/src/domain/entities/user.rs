//! User domain entity
//!
//! Represents a registered shop customer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A shop user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Unique across all users
    pub email: String,
    /// Hex-encoded salted SHA-256 digest, never the plaintext
    #[serde(skip_serializing)]
    pub password: String,
    pub number: String,
    pub address: String,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to register a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Plaintext, hashed by the user service before it is stored
    pub password: String,
    pub number: String,
    pub address: String,
    pub balance: i64,
}

/// Replacement values for an existing user
///
/// Balance is deliberately absent: it cannot be changed through an update.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// New plaintext password. `None` or empty keeps the stored hash.
    pub password: Option<String>,
    pub number: String,
    pub address: String,
}

impl UserUpdate {
    /// The new plaintext password, if one was actually supplied
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}
