//! Administrative entrypoint: runs destructive maintenance operations
//! directly against the document store, outside the HTTP surface.

use anyhow::Context;
use clap::{Parser, Subcommand};

use yatra_app::modules::seed;
use yatra_db::Store;
use yatra_kernel::settings::Settings;

#[derive(Parser)]
#[command(name = "yatra-cli", about = "Administrative tools for the yatra service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Clear the destination and trip collections and reinstall the fixed
    /// catalogue dataset. Bookings are untouched.
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load().with_context(|| "failed to load yatra settings")?;
    yatra_telemetry::init(&settings.telemetry);

    let store = Store::connect(&settings.database.url, &settings.database.name)
        .await
        .with_context(|| "failed to connect to document store")?;

    let outcome = match cli.command {
        Command::Seed => seed::run(&store).await,
    };

    store.shutdown().await;

    let summary = outcome.with_context(|| "seed operation failed")?;
    tracing::info!(
        destinations = summary.destinations,
        trips = summary.trips,
        "catalogue reseeded"
    );

    Ok(())
}
