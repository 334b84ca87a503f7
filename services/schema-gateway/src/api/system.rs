//! System/health API handlers.
//!
//! # Purpose and responsibility
//! Lightweight endpoints for service metadata and health checks, used by
//! probes and operators.
//!
//! # Key invariants and assumptions
//! - Health checks must be fast and side-effect free.
//! - Health covers the client directory only; registry reachability is
//!   reported per request as remote errors.
use crate::api::error::ApiError;
use crate::api::types::{HealthStatus, SystemInfo};
use crate::app::AppState;
use crate::error::Error;
use axum::Json;
use axum::extract::State;

#[utoipa::path(
    get,
    path = "/v1/system/info",
    tag = "system",
    responses(
        (status = 200, description = "Service identity and backends", body = SystemInfo)
    )
)]
pub(crate) async fn system_info(State(state): State<AppState>) -> Json<SystemInfo> {
    let store = state.access.store();
    Json(SystemInfo {
        service: state.service_name.clone(),
        api_version: state.api_version.clone(),
        storage_backend: store.backend_name().to_string(),
        durable_storage: store.is_durable(),
        registry_url: state.access.registry().endpoint(),
    })
}

#[utoipa::path(
    get,
    path = "/v1/system/health",
    tag = "system",
    responses(
        (status = 200, description = "Gateway health", body = HealthStatus),
        (status = 500, description = "Client directory unavailable", body = crate::api::types::ErrorResponse)
    )
)]
/// Return gateway health status.
///
/// # Errors
/// - Returns 500 if the client directory health check fails.
pub(crate) async fn system_health(
    State(state): State<AppState>,
) -> Result<Json<HealthStatus>, ApiError> {
    state
        .access
        .store()
        .health_check()
        .await
        .map_err(|err| Error::from(err).context("storage unavailable"))?;
    Ok(Json(HealthStatus {
        status: "ok".to_string(),
    }))
}
