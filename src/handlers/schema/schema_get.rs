use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

use super::{utils::schema_name, SchemaEndpoint, SchemaPath};

/// GET /api/schema/:name - Fetch a schema as YAML
///
/// 404 when the name is unknown. Encoding failures are internal faults
/// and surface as a generic 500.
pub async fn schema_get(
    State(endpoint): State<SchemaEndpoint>,
    Path(path): Path<SchemaPath>,
) -> Result<Response, ApiError> {
    let name = schema_name(path)?;

    let schema = endpoint
        .store
        .lookup(&name)
        .await
        .ok_or_else(|| ApiError::schema_not_found(&name))?;

    let yaml = schema.to_yaml().map_err(|e| {
        tracing::error!("Failed to encode schema '{}': {}", name, e);
        ApiError::internal_server_error("Schema encoding error")
    })?;

    Ok(([(header::CONTENT_TYPE, "application/yaml")], yaml).into_response())
}
