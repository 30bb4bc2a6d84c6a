//! Confstore Persistence - Database entities and the version store
//!
//! This crate provides:
//! - The SeaORM entity for the `configuration` table
//! - The schema migration that creates it
//! - The `VersionStore` trait and its SQL implementation

pub mod entity;
pub mod migration;
pub mod model;
pub mod sql;
pub mod traits;

// Re-export sea-orm for convenience
pub use sea_orm;
pub use sea_orm_migration;

// Re-export the version store abstraction and its SQL backend
pub use migration::Migrator;
pub use model::{ConfigurationRecord, HistoryEntry};
pub use sql::SqlVersionStore;
pub use traits::VersionStore;
