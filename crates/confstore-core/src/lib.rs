//! Confstore Core - Configuration domain services
//!
//! This crate provides:
//! - Required-field validation of submitted documents
//! - The ingestion pipeline (parse, validate, resolve version, persist)
//! - The template renderer

pub mod service;

// Re-export commonly used entry points
pub use service::ingest::{ingest, parse_payload};
pub use service::template::{RenderContext, context_from_json, render};
pub use service::validation::validate;
