//! Client directory inspection handlers.
//!
//! # Purpose
//! Read-only views over recorded usages, for operators and diagnostics.
use crate::api::error::{ApiError, api_not_found};
use crate::api::types::ClientListResponse;
use crate::app::AppState;
use crate::error::Error;
use crate::model::ClientUsage;
use axum::Json;
use axum::extract::{Path, State};

#[utoipa::path(
    get,
    path = "/v1/clients/{client_id}",
    tag = "clients",
    params(
        ("client_id" = String, Path, description = "Client usage identifier")
    ),
    responses(
        (status = 200, description = "Recorded client usage", body = ClientUsage),
        (status = 404, description = "Client not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_client(
    Path(client_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ClientUsage>, ApiError> {
    let client = state
        .access
        .store()
        .client_by_id(&client_id)
        .await
        .map_err(|err| Error::from(err).context("failed to fetch client"))?;
    match client {
        Some(client) => Ok(Json(client)),
        None => Err(api_not_found("client not found")),
    }
}

#[utoipa::path(
    get,
    path = "/v1/topics/{topic}/clients",
    tag = "clients",
    params(
        ("topic" = String, Path, description = "Topic name")
    ),
    responses(
        (status = 200, description = "Usages recorded for the topic", body = ClientListResponse)
    )
)]
pub(crate) async fn list_topic_clients(
    Path(topic): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ClientListResponse>, ApiError> {
    let mut items = state
        .access
        .store()
        .clients_on_topic(&topic)
        .await
        .map_err(|err| Error::from(err).context("failed to list clients"))?;
    items.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(Json(ClientListResponse { items }))
}
