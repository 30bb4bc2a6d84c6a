//! Main entry point for the Confstore server.
//!
//! Loads configuration, initializes logging, connects to the database,
//! applies pending schema migrations, and serves the HTTP API.

use std::sync::Arc;

use confstore_persistence::sea_orm_migration::MigratorTrait;
use confstore_persistence::{Migrator, SqlVersionStore, VersionStore};
use confstore_server::model::{AppState, Configuration};
use confstore_server::startup;
use tracing::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::new()?;
    let _logging_guard = startup::init_logging(
        &configuration.log_level(),
        configuration.log_dir().as_deref(),
    )?;

    let db = configuration.database_connection().await?;
    Migrator::up(&db, None).await?;

    let store: Arc<dyn VersionStore> = Arc::new(SqlVersionStore::new(db));
    let app_state = Arc::new(AppState::new(store, configuration.history_limit()));

    let address = configuration.server_address();
    let port = configuration.server_port();
    info!("confstore listening on {}:{}", address, port);

    startup::http_server(app_state, &address, port)?.await?;

    Ok(())
}
