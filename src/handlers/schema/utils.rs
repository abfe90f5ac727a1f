use axum::extract::Path;

use crate::error::ApiError;

use super::SchemaPath;

/// Rejects requests that reached the prefix without a schema name
pub async fn missing_name() -> ApiError {
    ApiError::missing_schema_name()
}

/// GET on anything below `/api/schema/:name`
pub async fn unknown_endpoint(Path(path): Path<SchemaPath>) -> ApiError {
    let rest = path.rest.clone();
    match schema_name(path) {
        Ok(_) => ApiError::unknown_endpoint(first_segment(rest.as_deref())),
        Err(missing) => missing,
    }
}

/// Validated schema name from the route captures
pub fn schema_name(path: SchemaPath) -> Result<String, ApiError> {
    if path.name.is_empty() {
        return Err(ApiError::missing_schema_name());
    }
    Ok(path.name)
}

fn first_segment(rest: Option<&str>) -> &str {
    rest.and_then(|r| r.split('/').next()).unwrap_or("")
}
