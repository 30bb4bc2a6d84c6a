//! Index and health endpoints

use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::model::common::AppState;

/// GET /
#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "endpoints": [
            "POST /config/{service}",
            "GET  /config/{service}?version=N&template=1",
            "GET  /config/{service}/history",
            "POST /config/{service}/render?version=N",
            "GET  /health",
        ],
    }))
}

/// GET /health
///
/// Probes the backing store so load balancers see database outages.
#[get("/health")]
async fn health(data: web::Data<AppState>) -> impl Responder {
    match data.store().health_check().await {
        Ok(()) => HttpResponse::Ok().json(json!({ "status": "ok" })),
        Err(e) => HttpResponse::InternalServerError().json(json!({
            "status": "error",
            "detail": e.to_string(),
        })),
    }
}
