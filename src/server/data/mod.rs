//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping
//! database structures out of the service and controller layers.

pub mod bot;
pub mod user;
