//! Router builder for the yatra HTTP server.

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};

use yatra_kernel::settings::CorsSettings;
use yatra_kernel::ModuleRegistry;

/// Builder for constructing the main HTTP router.
pub struct RouterBuilder {
    router: Router,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    /// Add a route to the router.
    pub fn route(mut self, path: &str, route: axum::routing::MethodRouter) -> Self {
        self.router = self.router.route(path, route);
        self
    }

    /// Mount a module's router under `/api/{module_name}`.
    pub fn mount_module(mut self, module_name: &str, module_router: Router) -> Self {
        let api_path = format!("/api/{}", module_name);
        self.router = self.router.nest(&api_path, module_router);
        self
    }

    /// Add tracing middleware.
    pub fn with_tracing(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        );
        self
    }

    /// Add CORS middleware from the configured allow-list. A wildcard entry
    /// permits any origin without credentials; an explicit list allows
    /// credentials for exactly the listed origins.
    pub fn with_cors(mut self, cors: &CorsSettings) -> Self {
        let layer = if cors.allows_any() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = cors
                .origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
        };

        self.router = self.router.layer(layer);
        self
    }

    /// Add request ID middleware.
    pub fn with_request_id(mut self) -> Self {
        self.router = self
            .router
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));
        self
    }

    /// Add timeout middleware.
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.router = self
            .router
            .layer(TimeoutLayer::new(Duration::from_millis(timeout_ms)));
        self
    }

    /// Merge OpenAPI fragments from all modules and mount Swagger UI.
    pub fn with_openapi(mut self, registry: &ModuleRegistry) -> Self {
        let mut spec = base_openapi_spec();

        for module in registry.modules() {
            let Some(fragment) = module.openapi() else {
                continue;
            };

            if let Some(paths) = fragment.get("paths").and_then(|p| p.as_object()) {
                for (path, item) in paths {
                    let prefixed = if path == "/" {
                        format!("/api/{}", module.name())
                    } else {
                        format!("/api/{}{}", module.name(), path)
                    };
                    spec["paths"][prefixed] = item.clone();
                }
            }

            if let Some(schemas) = fragment
                .pointer("/components/schemas")
                .and_then(|s| s.as_object())
            {
                for (name, schema) in schemas {
                    spec["components"]["schemas"][name] = schema.clone();
                }
            }
        }

        let openapi_obj: utoipa::openapi::OpenApi = serde_json::from_value(spec.clone())
            .unwrap_or_else(|_| {
                utoipa::openapi::OpenApiBuilder::new()
                    .info(
                        utoipa::openapi::InfoBuilder::new()
                            .title("Yatra Travel API")
                            .version("1.0.0")
                            .build(),
                    )
                    .build()
            });

        self.router = self.router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi_obj),
        );

        // Raw JSON spec for external consumers.
        self.router = self.router.route(
            "/docs/openapi.json",
            get(move || async move { Json(spec.clone()) }),
        );

        self
    }

    /// Build the final router.
    pub fn build(self) -> Router {
        self.router
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn base_openapi_spec() -> serde_json::Value {
    serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Yatra Travel API",
            "version": "1.0.0",
            "description": "Northeast India & Sikkim travel catalogue and booking API"
        },
        "paths": {
            "/healthz": {
                "get": {
                    "summary": "Health check",
                    "responses": {
                        "200": {
                            "description": "OK",
                            "content": { "text/plain": { "schema": { "type": "string" } } }
                        }
                    }
                }
            },
            "/api/": {
                "get": {
                    "summary": "API welcome message",
                    "responses": {
                        "200": {
                            "description": "Welcome message",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": { "message": { "type": "string" } }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "ErrorResponse": {
                    "type": "object",
                    "properties": {
                        "error": {
                            "type": "object",
                            "properties": {
                                "code": { "type": "string" },
                                "message": { "type": "string" },
                                "details": { "type": "array", "items": {} },
                                "trace_id": { "type": "string" },
                                "timestamp": { "type": "string" }
                            },
                            "required": ["code", "message", "trace_id", "timestamp"]
                        }
                    },
                    "required": ["error"]
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use tower::ServiceExt;

    #[tokio::test]
    async fn router_builds_with_routes() {
        let _router = RouterBuilder::new()
            .route("/test", get(|| async { "test" }))
            .build();
    }

    #[tokio::test]
    async fn module_mounting_builds() {
        let module_router = Router::new().route("/", get(|| async { "module" }));

        let _router = RouterBuilder::new()
            .mount_module("trips", module_router)
            .build();
    }

    #[tokio::test]
    async fn middleware_chain_builds_with_wildcard_cors() {
        let _router = RouterBuilder::new()
            .with_tracing()
            .with_cors(&CorsSettings::default())
            .with_request_id()
            .with_timeout(5000)
            .route("/health", get(|| async { "ok" }))
            .build();
    }

    #[tokio::test]
    async fn middleware_chain_builds_with_origin_list() {
        let cors = CorsSettings {
            origins: vec!["https://yatra.example".to_string()],
        };

        let _router = RouterBuilder::new()
            .with_cors(&cors)
            .route("/health", get(|| async { "ok" }))
            .build();
    }

    #[tokio::test]
    async fn wildcard_cors_applies_to_registered_routes() {
        let router = RouterBuilder::new()
            .route("/health", get(|| async { "ok" }))
            .with_cors(&CorsSettings::default())
            .build();

        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "https://yatra.example")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn origin_list_cors_echoes_allowed_origin() {
        let cors = CorsSettings {
            origins: vec!["https://yatra.example".to_string()],
        };

        let router = RouterBuilder::new()
            .route("/health", get(|| async { "ok" }))
            .with_cors(&cors)
            .build();

        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "https://yatra.example")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "https://yatra.example"
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn origin_list_cors_withholds_header_for_unknown_origin() {
        let cors = CorsSettings {
            origins: vec!["https://yatra.example".to_string()],
        };

        let router = RouterBuilder::new()
            .route("/health", get(|| async { "ok" }))
            .with_cors(&cors)
            .build();

        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "https://elsewhere.example")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[test]
    fn base_spec_declares_error_schema() {
        let spec = base_openapi_spec();
        assert!(spec
            .pointer("/components/schemas/ErrorResponse")
            .is_some());
    }
}
