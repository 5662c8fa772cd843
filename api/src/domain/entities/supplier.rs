//! Supplier domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a supplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SupplierId(pub Uuid);

impl SupplierId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SupplierId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SupplierId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
}
