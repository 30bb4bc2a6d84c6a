//! Version history endpoint

use actix_web::{Responder, get, web};
use serde::Serialize;

use confstore_persistence::HistoryEntry;

use super::error_response;
use crate::model::common::AppState;

#[derive(Debug, Serialize)]
struct HistoryItem {
    version: i64,
    created_at: String,
}

impl From<HistoryEntry> for HistoryItem {
    fn from(entry: HistoryEntry) -> Self {
        HistoryItem {
            version: entry.version,
            created_at: entry.created_at.to_rfc3339(),
        }
    }
}

/// GET /config/{service}/history
///
/// Newest-first list of `{version, created_at}`; an unknown service yields
/// an empty array.
#[get("/config/{service}/history")]
async fn get_history(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let service = path.into_inner();
    match data
        .store()
        .list_history(&service, data.history_limit())
        .await
    {
        Ok(entries) => {
            let items: Vec<HistoryItem> = entries.into_iter().map(HistoryItem::from).collect();
            actix_web::HttpResponse::Ok().json(items)
        }
        Err(e) => error_response(e),
    }
}
