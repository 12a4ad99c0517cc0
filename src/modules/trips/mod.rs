pub mod models;

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{Path, Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;
use serde_json::json;

use yatra_db::bson::Document;
use yatra_db::{doc, Store};
use yatra_http::error::AppError;
use yatra_http::AppJson;
use yatra_kernel::{InitCtx, Module};

use models::{TripPackage, TripPackageCreate};

/// Collection backing this module.
pub const COLLECTION: &str = "trips";

/// Trip packages: list (optionally by destination), fetch by id, create.
pub struct TripsModule;

impl TripsModule {
    pub const fn new() -> Self {
        Self
    }
}

/// Equality filters accepted by the trip listing.
#[derive(Debug, Default, Deserialize)]
pub struct TripFilter {
    pub destination_id: Option<String>,
}

impl TripFilter {
    /// Store query for this filter. An absent or empty `destination_id`
    /// matches everything.
    fn to_query(&self) -> Document {
        match self.destination_id.as_deref() {
            Some(destination_id) if !destination_id.is_empty() => {
                doc! { "destination_id": destination_id }
            }
            _ => doc! {},
        }
    }
}

#[async_trait]
impl Module for TripsModule {
    fn name(&self) -> &'static str {
        "trips"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "trips module initialized"
        );
        Ok(())
    }

    fn routes(&self, store: &Store) -> Router {
        Router::new()
            .route("/", get(list_trips).post(create_trip))
            .route("/{trip_id}", get(get_trip))
            .with_state(store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List trip packages",
                        "tags": ["Trips"],
                        "parameters": [{
                            "name": "destination_id",
                            "in": "query",
                            "required": false,
                            "schema": { "type": "string" }
                        }],
                        "responses": {
                            "200": {
                                "description": "Matching trip packages, capped at 1000",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/TripPackage" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "summary": "Create a trip package",
                        "tags": ["Trips"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/TripPackageCreate" }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "The created trip package",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/TripPackage" }
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
                },
                "/{trip_id}": {
                    "get": {
                        "summary": "Fetch a trip package by id",
                        "tags": ["Trips"],
                        "parameters": [{
                            "name": "trip_id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "string" }
                        }],
                        "responses": {
                            "200": {
                                "description": "The trip package",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/TripPackage" }
                                    }
                                }
                            },
                            "404": {
                                "description": "No trip with that id",
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
                    "TripPackage": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "destination_id": { "type": "string" },
                            "destination_name": { "type": "string" },
                            "title": { "type": "string" },
                            "duration": { "type": "string" },
                            "price_veg": { "type": "number" },
                            "price_non_veg": { "type": "number" },
                            "pickup_time": { "type": "string" },
                            "itinerary": { "type": "array", "items": { "type": "string" } },
                            "inclusions": { "type": "array", "items": { "type": "string" } },
                            "exclusions": { "type": "array", "items": { "type": "string" } },
                            "image_url": { "type": "string" }
                        },
                        "required": ["id", "destination_id", "destination_name", "title", "duration", "price_veg", "price_non_veg", "pickup_time", "itinerary", "inclusions", "exclusions", "image_url"]
                    },
                    "TripPackageCreate": {
                        "type": "object",
                        "properties": {
                            "destination_id": { "type": "string" },
                            "destination_name": { "type": "string" },
                            "title": { "type": "string" },
                            "duration": { "type": "string" },
                            "price_veg": { "type": "number" },
                            "price_non_veg": { "type": "number" },
                            "pickup_time": { "type": "string" },
                            "itinerary": { "type": "array", "items": { "type": "string" } },
                            "inclusions": { "type": "array", "items": { "type": "string" } },
                            "exclusions": { "type": "array", "items": { "type": "string" } },
                            "image_url": { "type": "string" }
                        },
                        "required": ["destination_id", "destination_name", "title", "duration", "price_veg", "price_non_veg", "pickup_time", "itinerary", "inclusions", "exclusions", "image_url"]
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "trips module stopped");
        Ok(())
    }
}

/// List trip packages, optionally restricted to a destination. An unknown
/// destination id yields an empty list, not an error.
async fn list_trips(
    State(store): State<Store>,
    Query(filter): Query<TripFilter>,
) -> Result<Json<Vec<TripPackage>>, AppError> {
    let trips = store.find(COLLECTION, filter.to_query()).await?;
    Ok(Json(trips))
}

/// Fetch a single trip package by id.
async fn get_trip(
    State(store): State<Store>,
    Path(trip_id): Path<String>,
) -> Result<Json<TripPackage>, AppError> {
    store
        .find_by_id(COLLECTION, &trip_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Trip not found"))
}

/// Create a trip package and return the stored record.
async fn create_trip(
    State(store): State<Store>,
    AppJson(input): AppJson<TripPackageCreate>,
) -> Result<Json<TripPackage>, AppError> {
    let trip = TripPackage::create(input);
    store.insert(COLLECTION, &trip).await?;
    Ok(Json(trip))
}

/// Create a new instance of the trips module.
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(TripsModule::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_with_destination_builds_equality_query() {
        let filter = TripFilter {
            destination_id: Some("dest-2".to_string()),
        };
        assert_eq!(filter.to_query(), doc! { "destination_id": "dest-2" });
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = TripFilter::default();
        assert_eq!(filter.to_query(), doc! {});
    }

    #[test]
    fn blank_destination_value_matches_everything() {
        let filter = TripFilter {
            destination_id: Some(String::new()),
        };
        assert_eq!(filter.to_query(), doc! {});
    }
}
