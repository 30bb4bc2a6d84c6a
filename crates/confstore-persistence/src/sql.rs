//! SQL-based version store (MySQL/PostgreSQL via SeaORM)
//!
//! Wraps a SeaORM `DatabaseConnection` and implements `VersionStore` with
//! direct queries. Version assignment is compute-then-insert: the unique
//! index on (service, version) turns a racing duplicate into a
//! `VersionConflict` instead of a second row.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{prelude::Expr, *};

use confstore_common::{ConfstoreError, Document};

use crate::entity::configuration;
use crate::model::{ConfigurationRecord, HistoryEntry};
use crate::traits::VersionStore;

/// External database version store
pub struct SqlVersionStore {
    db: DatabaseConnection,
}

impl SqlVersionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a reference to the underlying database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Highest version number recorded for a service, if any.
    async fn max_version(&self, service: &str) -> Result<Option<i64>, ConfstoreError> {
        let max = configuration::Entity::find()
            .select_only()
            .column_as(Expr::col(configuration::Column::Version).max(), "max_version")
            .filter(configuration::Column::Service.eq(service))
            .into_tuple::<Option<i64>>()
            .one(&self.db)
            .await
            .map_err(store_err)?
            .flatten();

        Ok(max)
    }
}

/// Map non-conflict database errors to the retryable store failure.
fn store_err(e: DbErr) -> ConfstoreError {
    ConfstoreError::StoreUnavailable(e.to_string())
}

#[async_trait]
impl VersionStore for SqlVersionStore {
    async fn create(
        &self,
        service: &str,
        explicit_version: Option<i64>,
        payload: &Document,
    ) -> Result<i64, ConfstoreError> {
        let version = match explicit_version {
            Some(v) => v,
            None => self.max_version(service).await?.unwrap_or(0) + 1,
        };

        let payload_json = serde_json::to_string(payload)
            .map_err(|e| ConfstoreError::Internal(format!("payload does not encode: {e}")))?;

        let row = configuration::ActiveModel {
            id: NotSet,
            service: Set(service.to_string()),
            version: Set(version),
            payload: Set(payload_json),
            created_at: Set(Utc::now()),
        };

        match row.insert(&self.db).await {
            Ok(inserted) => {
                tracing::info!(service, version = inserted.version, "configuration saved");
                Ok(inserted.version)
            }
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(ConfstoreError::VersionConflict {
                        service: service.to_string(),
                        version,
                    })
                }
                _ => Err(store_err(e)),
            },
        }
    }

    async fn get_latest(&self, service: &str) -> Result<ConfigurationRecord, ConfstoreError> {
        configuration::Entity::find()
            .filter(configuration::Column::Service.eq(service))
            .order_by_desc(configuration::Column::CreatedAt)
            .order_by_desc(configuration::Column::Id)
            .one(&self.db)
            .await
            .map_err(store_err)?
            .ok_or(ConfstoreError::NotFound)?
            .try_into()
    }

    async fn get_version(
        &self,
        service: &str,
        version: i64,
    ) -> Result<ConfigurationRecord, ConfstoreError> {
        configuration::Entity::find()
            .filter(configuration::Column::Service.eq(service))
            .filter(configuration::Column::Version.eq(version))
            .one(&self.db)
            .await
            .map_err(store_err)?
            .ok_or(ConfstoreError::NotFound)?
            .try_into()
    }

    async fn list_history(
        &self,
        service: &str,
        limit: u64,
    ) -> Result<Vec<HistoryEntry>, ConfstoreError> {
        let entries = configuration::Entity::find()
            .select_only()
            .column(configuration::Column::Version)
            .column(configuration::Column::CreatedAt)
            .filter(configuration::Column::Service.eq(service))
            .order_by_desc(configuration::Column::CreatedAt)
            .order_by_desc(configuration::Column::Id)
            .limit(limit)
            .into_tuple::<(i64, chrono::DateTime<Utc>)>()
            .all(&self.db)
            .await
            .map_err(store_err)?
            .into_iter()
            .map(|(version, created_at)| HistoryEntry {
                version,
                created_at,
            })
            .collect();

        Ok(entries)
    }

    async fn health_check(&self) -> Result<(), ConfstoreError> {
        configuration::Entity::find()
            .select_only()
            .column_as(Expr::cust("1"), "health")
            .into_tuple::<i32>()
            .one(&self.db)
            .await
            .map_err(store_err)?;
        Ok(())
    }
}
