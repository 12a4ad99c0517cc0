pub mod models;

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde_json::json;

use yatra_db::{doc, Store};
use yatra_http::error::AppError;
use yatra_http::AppJson;
use yatra_kernel::{InitCtx, Module};

use models::{Destination, DestinationCreate};

/// Collection backing this module.
pub const COLLECTION: &str = "destinations";

/// Destinations catalogue: list and create travel locations.
pub struct DestinationsModule;

impl DestinationsModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for DestinationsModule {
    fn name(&self) -> &'static str {
        "destinations"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "destinations module initialized"
        );
        Ok(())
    }

    fn routes(&self, store: &Store) -> Router {
        Router::new()
            .route("/", get(list_destinations).post(create_destination))
            .with_state(store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List destinations",
                        "tags": ["Destinations"],
                        "responses": {
                            "200": {
                                "description": "All destinations, capped at 1000",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/Destination" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "summary": "Create a destination",
                        "tags": ["Destinations"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/DestinationCreate" }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "The created destination, including its generated id",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Destination" }
                                    }
                                }
                            },
                            "422": {
                                "description": "Payload failed schema validation",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Destination": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "name": { "type": "string" },
                            "region": { "type": "string" },
                            "description": { "type": "string" },
                            "image_url": { "type": "string" },
                            "highlights": { "type": "array", "items": { "type": "string" } },
                            "best_season": { "type": "string" }
                        },
                        "required": ["id", "name", "region", "description", "image_url", "highlights", "best_season"]
                    },
                    "DestinationCreate": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "region": { "type": "string" },
                            "description": { "type": "string" },
                            "image_url": { "type": "string" },
                            "highlights": { "type": "array", "items": { "type": "string" } },
                            "best_season": { "type": "string" }
                        },
                        "required": ["name", "region", "description", "image_url", "highlights", "best_season"]
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "destinations module stopped");
        Ok(())
    }
}

/// List every destination.
async fn list_destinations(
    State(store): State<Store>,
) -> Result<Json<Vec<Destination>>, AppError> {
    let destinations = store.find(COLLECTION, doc! {}).await?;
    Ok(Json(destinations))
}

/// Create a destination and return the stored record.
async fn create_destination(
    State(store): State<Store>,
    AppJson(input): AppJson<DestinationCreate>,
) -> Result<Json<Destination>, AppError> {
    let destination = Destination::create(input);
    store.insert(COLLECTION, &destination).await?;
    Ok(Json(destination))
}

/// Create a new instance of the destinations module.
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(DestinationsModule::new())
}
