//! Domain model types returned by the version store
//!
//! These decouple callers from the entity layer: payloads come back as
//! decoded `Document` trees, never as raw column text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use confstore_common::{ConfstoreError, Document};

use crate::entity::configuration;

/// One immutable configuration version
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    pub service: String,
    pub version: i64,
    pub payload: Document,
    pub created_at: DateTime<Utc>,
}

/// History listing item: version number plus insertion time
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub version: i64,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<configuration::Model> for ConfigurationRecord {
    type Error = ConfstoreError;

    fn try_from(entity: configuration::Model) -> Result<Self, Self::Error> {
        let payload: Document = serde_json::from_str(&entity.payload).map_err(|e| {
            ConfstoreError::Internal(format!(
                "stored payload for '{}' version {} does not decode: {}",
                entity.service, entity.version, e
            ))
        })?;

        Ok(ConfigurationRecord {
            service: entity.service,
            version: entity.version,
            payload,
            created_at: entity.created_at,
        })
    }
}
