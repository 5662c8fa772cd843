//! Domain layer
//!
//! Shop types and the storage contracts the services depend on.
//! - `entities`: users, orders, catalog items and their typed IDs
//! - `ports`: repository traits implemented by the adapters

pub mod entities;
pub mod ports;
