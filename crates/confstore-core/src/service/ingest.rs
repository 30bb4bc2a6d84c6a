//! Ingestion pipeline
//!
//! Sequencing: parse raw bytes into a `Document`, validate required
//! fields, resolve the version number (explicit or auto-next), persist
//! via the version store. A failure at any stage leaves no row written.

use confstore_common::{ConfstoreError, Document};
use confstore_persistence::VersionStore;

use super::validation;

/// Parse a raw YAML body into a document.
///
/// Empty bodies, unparseable YAML, and non-mapping top levels are all
/// `MalformedInput`.
pub fn parse_payload(raw: &[u8]) -> Result<Document, ConfstoreError> {
    if raw.is_empty() {
        return Err(ConfstoreError::MalformedInput("empty body".to_string()));
    }

    let doc: Document = serde_yaml::from_slice(raw)
        .map_err(|e| ConfstoreError::MalformedInput(format!("YAML parse error: {e}")))?;

    if doc.as_map().is_none() {
        return Err(ConfstoreError::MalformedInput(
            "YAML must represent a mapping (object)".to_string(),
        ));
    }

    Ok(doc)
}

/// Ingest one configuration submission and return the assigned version.
///
/// The explicit version argument wins over a `version` field embedded in
/// the document; with neither, the store assigns max + 1. The payload is
/// stored verbatim as submitted — an embedded `version` field is kept,
/// and an auto-assigned number is never written back into it.
pub async fn ingest(
    store: &dyn VersionStore,
    service: &str,
    explicit_version: Option<i64>,
    raw: &[u8],
) -> Result<i64, ConfstoreError> {
    if service.trim().is_empty() {
        return Err(ConfstoreError::MalformedInput(
            "service must be a non-empty identifier".to_string(),
        ));
    }

    let doc = parse_payload(raw)?;

    let violations = validation::validate(&doc);
    if !violations.is_empty() {
        return Err(ConfstoreError::ValidationFailed(violations));
    }

    let explicit = match explicit_version {
        Some(v) => Some(v),
        None => doc.get("version").and_then(Document::as_i64),
    };

    let version = store.create(service, explicit, &doc).await?;
    tracing::debug!(service, version, "ingested configuration");
    Ok(version)
}
