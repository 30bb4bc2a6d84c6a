//! Required-field validation of submitted configurations
//!
//! Checks presence, type, and value constraints on the fields every
//! configuration must carry. Messages keep the wording clients already
//! parse.

use confstore_common::Document;

/// Validate a parsed configuration document.
///
/// Returns every violation found; an empty list means the document is
/// valid. Checked:
/// - `database.host`: required, non-empty string
/// - `database.port`: required, integer in 1..=65535
/// - `version`: optional, but a positive integer when present
pub fn validate(doc: &Document) -> Vec<String> {
    let mut errors = Vec::new();

    match doc.get_path("database.host") {
        None => errors.push("Missing required field: database.host".to_string()),
        Some(Document::String(host)) => {
            if host.trim().is_empty() {
                errors.push("Invalid database.host: must be non-empty string".to_string());
            }
        }
        Some(_) => errors.push("Invalid type for database.host: expected string".to_string()),
    }

    match doc.get_path("database.port") {
        None => errors.push("Missing required field: database.port".to_string()),
        Some(Document::Integer(port)) => {
            if !(1..=65535).contains(port) {
                errors.push("Invalid database.port: must be 1..65535".to_string());
            }
        }
        Some(_) => errors.push("Invalid type for database.port: expected integer".to_string()),
    }

    match doc.get("version") {
        None => {}
        Some(Document::Integer(version)) => {
            if *version < 1 {
                errors.push("Invalid version: must be positive".to_string());
            }
        }
        Some(_) => errors.push("Invalid type for version: expected integer".to_string()),
    }

    errors
}
