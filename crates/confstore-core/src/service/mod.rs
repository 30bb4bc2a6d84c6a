//! Configuration service layer
//!
//! This module provides the domain operations over documents:
//! - Ingestion pipeline (parse, validate, resolve version, persist)
//! - Required-field validation
//! - Template rendering

pub mod ingest;
pub mod template;
pub mod validation;
