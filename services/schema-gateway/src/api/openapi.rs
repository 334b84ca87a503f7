//! OpenAPI schema aggregation for the gateway API.
use crate::access::GetSchemaCmd;
use crate::api::{
    clients, schemas, system,
    types::{ClientListResponse, ErrorResponse, HealthStatus, SystemInfo},
};
use crate::model::{Action, ClientUsage};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "schema-gateway",
        version = "v1",
        description = "Schema access gateway HTTP API"
    ),
    paths(
        schemas::get_schema,
        clients::get_client,
        clients::list_topic_clients,
        system::system_info,
        system::system_health
    ),
    components(schemas(
        GetSchemaCmd,
        ClientUsage,
        Action,
        ClientListResponse,
        ErrorResponse,
        HealthStatus,
        SystemInfo
    )),
    tags(
        (name = "schemas", description = "Schema access"),
        (name = "clients", description = "Recorded client usages"),
        (name = "system", description = "System and discovery endpoints")
    )
)]
pub struct ApiDoc;
