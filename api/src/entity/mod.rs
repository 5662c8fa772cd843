//! SeaORM entity definitions
//!
//! Table models used by the PostgreSQL adapters. Domain code never sees these;
//! the adapters convert them into `domain::entities` types.

pub mod categories;
pub mod orders;
pub mod products;
pub mod suppliers;
pub mod users;
