//! HTTP server setup

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::api;
use crate::model::common::AppState;

/// Creates and binds the HTTP server serving the configuration API.
pub fn http_server(
    app_state: Arc<AppState>,
    address: &str,
    port: u16,
) -> Result<Server, std::io::Error> {
    let state = web::Data::from(app_state);

    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(api::routes)
    })
    .bind((address.to_string(), port))?
    .run())
}
