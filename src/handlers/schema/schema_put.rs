use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, OriginalUri, Path, State},
    http::{HeaderMap, Method, StatusCode},
    response::IntoResponse,
};

use crate::error::ApiError;
use crate::schema::Schema;

use super::{utils::schema_name, SchemaEndpoint, SchemaPath};

/// PUT /api/schema/:name - Create or replace a schema
///
/// The body is YAML (or JSON with a JSON content type). An existing schema
/// under the same name is overwritten without any version check.
pub async fn schema_put(
    State(endpoint): State<SchemaEndpoint>,
    Path(path): Path<SchemaPath>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let name = schema_name(path)?;

    let schema: Schema = match endpoint.decoder.decode(&headers, body) {
        Ok(schema) => schema,
        Err(e) => {
            endpoint.log.record(&format!("{} {} {}", method, uri, e));
            return Err(e.into());
        }
    };

    endpoint.store.upsert(&name, schema).await;
    endpoint.log.record(&format!("{} {}", method, uri));

    Ok((StatusCode::CREATED, "Created successfully\n"))
}
