//! Configuration endpoints: upload, fetch, render

use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;
use serde_json::json;

use confstore_common::ConfstoreError;
use confstore_core::service::{ingest, template};
use confstore_persistence::{ConfigurationRecord, VersionStore};

use super::error_response;
use crate::model::common::AppState;

#[derive(Debug, Deserialize)]
pub struct ConfigQuery {
    version: Option<String>,
    template: Option<String>,
}

/// Parse the optional `version` query parameter with the message clients
/// expect.
fn parse_version(raw: Option<&str>) -> Result<Option<i64>, ConfstoreError> {
    match raw {
        None => Ok(None),
        Some(s) => s
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ConfstoreError::MalformedInput("version must be integer".to_string())),
    }
}

/// Fetch the requested version, or the latest when none is given.
async fn fetch(
    store: &dyn VersionStore,
    service: &str,
    version: Option<i64>,
) -> Result<ConfigurationRecord, ConfstoreError> {
    match version {
        Some(v) => store.get_version(service, v).await,
        None => store.get_latest(service).await,
    }
}

/// Build a render context from a JSON request body; an empty body means an
/// empty context.
fn parse_context(raw: &[u8]) -> Result<template::RenderContext, ConfstoreError> {
    if raw.is_empty() {
        return Ok(template::RenderContext::new());
    }
    let value: serde_json::Value = serde_json::from_slice(raw).map_err(|e| {
        ConfstoreError::MalformedInput(format!("Invalid JSON body for template context: {e}"))
    })?;
    template::context_from_json(&value)
}

/// POST /config/{service}
///
/// Body is YAML. `database.host` and `database.port` are required; a
/// `version` field, when present, is used as the explicit version,
/// otherwise the next number is assigned.
#[post("/config/{service}")]
async fn create_config(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    let service = path.into_inner();
    match ingest::ingest(data.store(), &service, None, &body).await {
        Ok(version) => HttpResponse::Ok().json(json!({
            "service": service,
            "version": version,
            "status": "saved",
        })),
        Err(e) => error_response(e),
    }
}

/// GET /config/{service}?version=N&template=1
///
/// Returns the stored payload; with `template=1` the request body is a
/// JSON render context and the payload is rendered before returning.
#[get("/config/{service}")]
async fn get_config(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ConfigQuery>,
    body: web::Bytes,
) -> impl Responder {
    let service = path.into_inner();
    let version = match parse_version(query.version.as_deref()) {
        Ok(v) => v,
        Err(e) => return error_response(e),
    };

    let record = match fetch(data.store(), &service, version).await {
        Ok(record) => record,
        Err(e) => return error_response(e),
    };

    if query.template.as_deref() != Some("1") {
        return HttpResponse::Ok().json(record.payload);
    }

    let ctx = match parse_context(&body) {
        Ok(ctx) => ctx,
        Err(e) => return error_response(e),
    };
    match template::render(&record.payload, &ctx) {
        Ok(rendered) => HttpResponse::Ok().json(rendered),
        Err(e) => error_response(e),
    }
}

/// POST /config/{service}/render?version=N
///
/// Render context in the JSON body; returns the rendered payload.
#[post("/config/{service}/render")]
async fn render_config(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ConfigQuery>,
    body: web::Bytes,
) -> impl Responder {
    let service = path.into_inner();
    let version = match parse_version(query.version.as_deref()) {
        Ok(v) => v,
        Err(e) => return error_response(e),
    };

    let record = match fetch(data.store(), &service, version).await {
        Ok(record) => record,
        Err(e) => return error_response(e),
    };
    let ctx = match parse_context(&body) {
        Ok(ctx) => ctx,
        Err(e) => return error_response(e),
    };
    match template::render(&record.payload, &ctx) {
        Ok(rendered) => HttpResponse::Ok().json(rendered),
        Err(e) => error_response(e),
    }
}
