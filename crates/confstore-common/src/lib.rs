//! Confstore Common - Shared types used across all Confstore components
//!
//! This crate provides:
//! - The error taxonomy returned by every component
//! - The `Document` model, the common currency between parsing, storage,
//!   and template rendering

pub mod document;
pub mod error;

// Re-exports for convenience
pub use document::Document;
pub use error::ConfstoreError;

/// History page size served by the HTTP layer unless configured otherwise
pub const DEFAULT_HISTORY_LIMIT: u64 = 50;
