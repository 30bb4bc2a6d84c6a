//! Version store trait
//!
//! Defines the interface for versioned configuration storage. The backing
//! store only needs atomic "insert row, fail on uniqueness violation"
//! semantics plus equality/ordering queries on (service, version) and
//! created_at.

use async_trait::async_trait;

use confstore_common::{ConfstoreError, Document};

use crate::model::{ConfigurationRecord, HistoryEntry};

/// Versioned configuration storage operations
#[async_trait]
pub trait VersionStore: Send + Sync {
    /// Insert a new configuration version and return the assigned number.
    ///
    /// With an explicit version the insert targets exactly that number and
    /// a collision surfaces as `VersionConflict` — the caller must not be
    /// retried silently under a different number. Without one, the next
    /// number is computed as `max(version) + 1` for the service (1 when the
    /// service is unseen) and then inserted optimistically: a racing writer
    /// taking the same number also surfaces as `VersionConflict`, and a
    /// fresh call recomputes from current state. The uniqueness constraint
    /// in the store is the only write-side coordination.
    async fn create(
        &self,
        service: &str,
        explicit_version: Option<i64>,
        payload: &Document,
    ) -> Result<i64, ConfstoreError>;

    /// Most recently inserted version for a service, by insertion time
    /// rather than by numeric version. `NotFound` when the service has no
    /// versions.
    async fn get_latest(&self, service: &str) -> Result<ConfigurationRecord, ConfstoreError>;

    /// Exact (service, version) row, or `NotFound`.
    async fn get_version(
        &self,
        service: &str,
        version: i64,
    ) -> Result<ConfigurationRecord, ConfstoreError>;

    /// Up to `limit` history entries, newest insertion first. An unknown
    /// service yields an empty list, not an error.
    async fn list_history(
        &self,
        service: &str,
        limit: u64,
    ) -> Result<Vec<HistoryEntry>, ConfstoreError>;

    /// Connectivity probe against the backing store.
    async fn health_check(&self) -> Result<(), ConfstoreError>;
}
