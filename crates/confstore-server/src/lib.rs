//! Confstore Server - HTTP API for the versioned configuration service
//!
//! This crate wires the domain services to actix-web:
//! - `api`: route handlers and error-to-status mapping
//! - `model`: application state and configuration loading
//! - `startup`: logging and HTTP server setup

pub mod api;
pub mod model;
pub mod startup;
