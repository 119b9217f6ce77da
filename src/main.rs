use std::sync::Arc;

use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod api;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod report;
mod routes;
mod store;
mod views;

use config::Config;
use db::init_db;
use docs::ApiDoc;
use store::{HrStore, MemoryStore, MySqlStore};

async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn HrStore>> {
    let store: Arc<dyn HrStore> = if config.uses_memory_store() {
        Arc::new(MemoryStore::new())
    } else {
        let pool = init_db(&config.database_url, config.db_max_connections)
            .await
            .context("Failed to connect to database")?;
        Arc::new(MySqlStore::new(pool))
    };

    store
        .ensure_schema()
        .await
        .context("Failed to create database schema")?;
    info!(backend = store.backend_tag(), "Store ready");

    Ok(store)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();

    info!(addr = %config.server_addr, "Server starting...");

    let store = build_store(&config).await?;
    let store = Data::from(store);

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .bind(&config.server_addr)?
    .run()
    .await?;

    Ok(())
}
