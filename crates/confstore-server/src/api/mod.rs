//! HTTP API routes and error mapping

pub mod config;
pub mod health;
pub mod history;

use actix_web::{HttpResponse, web};
use serde_json::json;

use confstore_common::ConfstoreError;

/// Register every route on the application.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::index)
        .service(health::health)
        .service(config::create_config)
        .service(config::get_config)
        .service(config::render_config)
        .service(history::get_history);
}

/// Map a component failure to its HTTP response.
pub(crate) fn error_response(err: ConfstoreError) -> HttpResponse {
    match &err {
        ConfstoreError::MalformedInput(_) => {
            HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
        }
        ConfstoreError::ValidationFailed(errors) => {
            HttpResponse::UnprocessableEntity().json(json!({ "errors": errors }))
        }
        ConfstoreError::VersionConflict { .. } => {
            HttpResponse::Conflict().json(json!({ "error": err.to_string() }))
        }
        ConfstoreError::NotFound => {
            HttpResponse::NotFound().json(json!({ "error": "service not found" }))
        }
        ConfstoreError::UndefinedPlaceholder(_) | ConfstoreError::MalformedTemplate(_) => {
            HttpResponse::UnprocessableEntity().json(json!({ "errors": [err.to_string()] }))
        }
        ConfstoreError::StoreUnavailable(_) => {
            tracing::error!(error = %err, "backing store unavailable");
            HttpResponse::ServiceUnavailable().json(json!({ "error": err.to_string() }))
        }
        ConfstoreError::Internal(_) => {
            tracing::error!(error = %err, "internal error");
            HttpResponse::InternalServerError().json(json!({ "error": "internal server error" }))
        }
    }
}
