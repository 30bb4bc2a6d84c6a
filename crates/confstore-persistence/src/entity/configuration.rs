//! Configuration version entity
//!
//! One row per immutable (service, version) pair. Rows are only ever
//! inserted; the uniqueness constraint on (service, version) is what makes
//! concurrent version assignment safe.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "configuration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Caller-chosen service namespace, case-sensitive
    pub service: String,
    /// Positive version number, unique within the service
    pub version: i64,
    /// Document tree serialized as JSON, stored verbatim as submitted
    #[sea_orm(column_type = "Text")]
    pub payload: String,
    /// Insertion timestamp assigned by the store
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
