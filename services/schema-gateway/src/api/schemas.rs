//! Schema access API handler.
//!
//! # Purpose
//! Decodes the access request, runs the orchestration and returns the raw
//! schema text. A client disconnect drops the handler future, which cancels
//! the in-flight registry fetch through the drop guard.
use crate::access::GetSchemaCmd;
use crate::api::error::ApiError;
use crate::app::AppState;
use crate::error::Error;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tokio_util::sync::CancellationToken;

#[utoipa::path(
    post,
    path = "/schemas/schema",
    tag = "schemas",
    request_body = GetSchemaCmd,
    responses(
        (status = 200, description = "Schema text as stored in the registry", body = String, content_type = "application/json"),
        (status = 400, description = "Topic already bound to another schema", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Schema not found in the registry", body = crate::api::types::ErrorResponse),
        (status = 422, description = "Invalid body or request field", body = crate::api::types::ErrorResponse),
        (status = 502, description = "Schema registry failure", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_schema(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let cmd: GetSchemaCmd = serde_json::from_slice(&body)
        .map_err(|err| Error::invalid_json_body(err.to_string()))?;

    let cancel = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();
    let result = state.access.get_schema(&cmd, &cancel).await;

    let outcome = match &result {
        Ok(_) => "ok",
        Err(err) => err.kind().code(),
    };
    metrics::counter!("schema_gateway_requests_total", "outcome" => outcome).increment(1);

    let schema = result?;
    Ok(([(header::CONTENT_TYPE, "application/json")], schema).into_response())
}
