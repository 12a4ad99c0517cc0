use anyhow::Context;

use yatra_app::modules;
use yatra_db::Store;
use yatra_kernel::settings::Settings;
use yatra_kernel::{InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load yatra settings")?;
    yatra_telemetry::init(&settings.telemetry);

    tracing::info!(
        env = ?settings.environment,
        db = %settings.database.url,
        "yatra-app bootstrap starting"
    );

    let store = Store::connect(&settings.database.url, &settings.database.name)
        .await
        .with_context(|| "failed to connect to document store")?;

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry);

    let outcome = run(&registry, &settings, &store).await;

    // The store handle is released here, once, whatever run() returned.
    store.shutdown().await;
    tracing::info!("yatra-app shutdown complete");

    outcome
}

async fn run(
    registry: &ModuleRegistry,
    settings: &Settings,
    store: &Store,
) -> anyhow::Result<()> {
    let ctx = InitCtx { settings };
    registry.init_all(&ctx).await?;

    yatra_http::start_server(registry, settings, store).await?;

    registry.stop_all().await
}
