pub mod data;

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde::Serialize;
use serde_json::json;

use yatra_db::{Store, StoreError};
use yatra_http::error::AppError;
use yatra_kernel::{InitCtx, Module};

use crate::modules::{destinations, trips};

/// Counts reported after a reseed.
#[derive(Debug, Serialize)]
pub struct SeedSummary {
    pub message: String,
    pub destinations: usize,
    pub trips: usize,
}

/// Reset the destination and trip collections to the fixed dataset.
///
/// Bookings are untouched. The clear-then-insert sequence is not atomic;
/// a failure partway leaves the collections partially seeded, and rerunning
/// converges because the clear step removes whatever landed.
pub async fn run(store: &Store) -> Result<SeedSummary, StoreError> {
    tracing::warn!("reseeding: clearing destination and trip collections");

    store.clear(destinations::COLLECTION).await?;
    store.clear(trips::COLLECTION).await?;

    let destinations_inserted = store
        .insert_many(destinations::COLLECTION, &data::destinations())
        .await?;
    let trips_inserted = store.insert_many(trips::COLLECTION, &data::trips()).await?;

    tracing::info!(
        destinations = destinations_inserted,
        trips = trips_inserted,
        "reseed complete"
    );

    Ok(SeedSummary {
        message: "Database seeded successfully".to_string(),
        destinations: destinations_inserted,
        trips: trips_inserted,
    })
}

/// Destructive reseed of the catalogue collections. Also available
/// out-of-band through the `yatra-cli` binary.
pub struct SeedModule;

impl SeedModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for SeedModule {
    fn name(&self) -> &'static str {
        "seed"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "seed module initialized"
        );
        Ok(())
    }

    fn routes(&self, store: &Store) -> Router {
        Router::new()
            .route("/", post(seed_database))
            .with_state(store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "post": {
                        "summary": "Reset and repopulate the catalogue",
                        "description": "Clears destinations and trips, then inserts the fixed dataset. Bookings are left untouched.",
                        "tags": ["Seed"],
                        "responses": {
                            "200": {
                                "description": "Counts of seeded records",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/SeedSummary" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "SeedSummary": {
                        "type": "object",
                        "properties": {
                            "message": { "type": "string" },
                            "destinations": { "type": "integer" },
                            "trips": { "type": "integer" }
                        },
                        "required": ["message", "destinations", "trips"]
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "seed module stopped");
        Ok(())
    }
}

async fn seed_database(State(store): State<Store>) -> Result<Json<SeedSummary>, AppError> {
    let summary = run(&store).await?;
    Ok(Json(summary))
}

/// Create a new instance of the seed module.
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(SeedModule::new())
}
