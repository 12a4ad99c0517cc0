//! HTTP server facade for the yatra service: Axum router assembly, error
//! envelope, body extraction, and graceful shutdown.

use anyhow::Context;
use axum::extract::FromRequest;
use axum::{routing::get, Json, Router};
use serde_json::json;

use yatra_db::Store;
use yatra_kernel::settings::Settings;
use yatra_kernel::ModuleRegistry;

pub mod error;
pub mod router;

use error::AppError;
use router::RouterBuilder;

/// Message returned from the API root.
const WELCOME_MESSAGE: &str = "Northeast India & Sikkim Travel API";

/// JSON body extractor whose rejections are rendered in the service's
/// standard error envelope instead of axum's plain-text default.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Run the HTTP server until a shutdown signal arrives.
pub async fn start_server(
    registry: &ModuleRegistry,
    settings: &Settings,
    store: &Store,
) -> anyhow::Result<()> {
    let app = build_router(registry, settings, store);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", settings.server.host, settings.server.port))
            .await
            .context("failed to bind to address")?;

    tracing::info!(
        "HTTP server listening on http://{}:{}",
        settings.server.host,
        settings.server.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    Ok(())
}

/// Build the main HTTP router with all module routes mounted under `/api`.
///
/// Routes and modules are registered first: `Router::layer` only wraps
/// routes that already exist, so the middleware stack goes on last.
fn build_router(registry: &ModuleRegistry, settings: &Settings, store: &Store) -> Router {
    let mut builder = RouterBuilder::new()
        .route("/healthz", get(health_check))
        .route("/api", get(api_root))
        .route("/api/", get(api_root));

    for module in registry.modules() {
        tracing::info!(
            module = module.name(),
            "mounting module routes under /api/{}",
            module.name()
        );
        builder = builder.mount_module(module.name(), module.routes(store));
    }

    builder
        .with_openapi(registry)
        .with_tracing()
        .with_cors(&settings.cors)
        .with_request_id()
        .with_timeout(settings.server.request_timeout_ms)
        .build()
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

/// API root welcome message.
async fn api_root() -> Json<serde_json::Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received, draining connections");
}
