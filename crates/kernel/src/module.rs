use async_trait::async_trait;
use axum::Router;
use yatra_db::Store;

/// Context provided to modules during initialization and shutdown.
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
}

/// Core trait every resource module of the service implements.
///
/// Modules own their routes and get mounted under `/api/{module_name}`.
/// The store handle is passed when routes are built so handlers can hold a
/// cheap clone of it as router state.
#[async_trait]
pub trait Module: Send + Sync {
    /// Unique name for this module; doubles as the mount path segment.
    fn name(&self) -> &'static str;

    /// Initialize the module. Called during application startup, before
    /// the HTTP server begins accepting requests.
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Build the Axum router for this module's routes.
    fn routes(&self, _store: &Store) -> Router {
        Router::new()
    }

    /// OpenAPI specification fragment for this module, merged with the
    /// fragments of the other modules by the HTTP layer.
    fn openapi(&self) -> Option<serde_json::Value> {
        None
    }

    /// Stop the module and clean up resources during shutdown.
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
