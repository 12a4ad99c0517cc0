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

use models::{Booking, BookingCreate};

/// Collection backing this module.
pub const COLLECTION: &str = "bookings";

/// Bookings: list reservations and create new ones. No update, cancel, or
/// delete surface exists; a booking's status never changes after creation.
pub struct BookingsModule;

impl BookingsModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for BookingsModule {
    fn name(&self) -> &'static str {
        "bookings"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "bookings module initialized"
        );
        Ok(())
    }

    fn routes(&self, store: &Store) -> Router {
        Router::new()
            .route("/", get(list_bookings).post(create_booking))
            .with_state(store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List bookings",
                        "tags": ["Bookings"],
                        "responses": {
                            "200": {
                                "description": "All bookings, capped at 1000",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/Booking" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "summary": "Create a booking",
                        "tags": ["Bookings"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/BookingCreate" }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "The created booking, with generated id, timestamp, and status",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Booking" }
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
                    "Booking": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "trip_id": { "type": "string" },
                            "trip_title": { "type": "string" },
                            "customer_name": { "type": "string" },
                            "customer_email": { "type": "string" },
                            "customer_phone": { "type": "string" },
                            "travel_date": { "type": "string" },
                            "guests": { "type": "integer" },
                            "meal_preference": { "type": "string" },
                            "total_amount": { "type": "number" },
                            "booking_date": { "type": "string", "format": "date-time" },
                            "status": { "type": "string" }
                        },
                        "required": ["id", "trip_id", "trip_title", "customer_name", "customer_email", "customer_phone", "travel_date", "guests", "meal_preference", "total_amount", "booking_date", "status"]
                    },
                    "BookingCreate": {
                        "type": "object",
                        "properties": {
                            "trip_id": { "type": "string" },
                            "trip_title": { "type": "string" },
                            "customer_name": { "type": "string" },
                            "customer_email": { "type": "string" },
                            "customer_phone": { "type": "string" },
                            "travel_date": { "type": "string" },
                            "guests": { "type": "integer" },
                            "meal_preference": { "type": "string" },
                            "total_amount": { "type": "number" }
                        },
                        "required": ["trip_id", "trip_title", "customer_name", "customer_email", "customer_phone", "travel_date", "guests", "meal_preference", "total_amount"]
                    }
                }
            }
        }))
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "bookings module stopped");
        Ok(())
    }
}

/// List every booking. Legacy records whose timestamp was stored as a
/// string are parsed transparently by the model's deserializer.
async fn list_bookings(State(store): State<Store>) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = store.find(COLLECTION, doc! {}).await?;
    Ok(Json(bookings))
}

/// Create a booking and return the stored record.
async fn create_booking(
    State(store): State<Store>,
    AppJson(input): AppJson<BookingCreate>,
) -> Result<Json<Booking>, AppError> {
    let booking = Booking::create(input);
    store.insert(COLLECTION, &booking).await?;
    Ok(Json(booking))
}

/// Create a new instance of the bookings module.
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(BookingsModule::new())
}
