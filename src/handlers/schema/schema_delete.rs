use axum::{
    extract::{OriginalUri, Path, State},
    http::Method,
    response::IntoResponse,
};

use crate::error::ApiError;

use super::{utils::schema_name, SchemaEndpoint, SchemaPath};

/// DELETE /api/schema/:name - Remove a schema
pub async fn schema_delete(
    State(endpoint): State<SchemaEndpoint>,
    Path(path): Path<SchemaPath>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Result<impl IntoResponse, ApiError> {
    let name = schema_name(path)?;

    if !endpoint.store.delete(&name).await {
        return Err(ApiError::schema_not_found(&name));
    }

    endpoint.log.record(&format!("{} {}", method, uri));
    Ok("Deleted successfully\n")
}
