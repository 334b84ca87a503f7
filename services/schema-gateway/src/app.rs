//! Gateway HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
use crate::access::AccessService;
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::observability;
use axum::Json;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub service_name: String,
    pub api_version: String,
    pub access: Arc<AccessService>,
}

impl AppState {
    pub fn new(access: Arc<AccessService>) -> Self {
        Self {
            service_name: "schema-gateway".to_string(),
            api_version: "v1".to_string(),
            access,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            let parent = observability::trace_context_from_headers(request.headers());
            let span = tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            );
            span.set_parent(parent);
            span
        });

    Router::new()
        .route(
            "/schemas/schema",
            axum::routing::post(api::schemas::get_schema),
        )
        .route(
            "/v1/clients/:client_id",
            axum::routing::get(api::clients::get_client),
        )
        .route(
            "/v1/topics/:topic/clients",
            axum::routing::get(api::clients::list_topic_clients),
        )
        .route(
            "/v1/system/info",
            axum::routing::get(api::system::system_info),
        )
        .route(
            "/v1/system/health",
            axum::routing::get(api::system::system_health),
        )
        .route(
            "/v1/openapi.json",
            axum::routing::get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(trace_layer)
        .with_state(state)
}
