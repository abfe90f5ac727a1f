// handlers/schema/mod.rs - Schema document endpoint
//
// Route prefix: /api/schema/
//
//   GET    /api/schema/:name   -> YAML document
//   PUT    /api/schema/:name   -> create or replace
//   DELETE /api/schema/:name   -> remove
//
// The name is a named capture, so a missing name or trailing segments are
// separate routes rather than index checks inside the handlers.

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use serde::Deserialize;

use crate::decode::BodyDecoder;
use crate::logging::AccessLog;
use crate::schema::SchemaStore;

pub mod schema_delete; // DELETE /api/schema/:name
pub mod schema_get;    // GET /api/schema/:name
pub mod schema_put;    // PUT /api/schema/:name
pub mod utils;

pub use schema_delete::schema_delete;
pub use schema_get::schema_get;
pub use schema_put::schema_put;

/// Shared state for the schema handlers
#[derive(Clone)]
pub struct SchemaEndpoint {
    pub store: Arc<dyn SchemaStore>,
    pub log: Arc<dyn AccessLog>,
    pub decoder: BodyDecoder,
}

impl SchemaEndpoint {
    pub fn new(store: Arc<dyn SchemaStore>, log: Arc<dyn AccessLog>, max_body_bytes: usize) -> Self {
        Self {
            store,
            log,
            decoder: BodyDecoder::new(max_body_bytes),
        }
    }

    /// Router for everything under `/api/schema`. Verbs other than
    /// GET, PUT and DELETE get a 405 from the method router.
    pub fn routes(self) -> Router {
        let body_limit = self.decoder.limit();

        Router::new()
            .route(
                "/api/schema",
                get(utils::missing_name)
                    .put(utils::missing_name)
                    .delete(utils::missing_name),
            )
            .route(
                "/api/schema/",
                get(utils::missing_name)
                    .put(utils::missing_name)
                    .delete(utils::missing_name),
            )
            .route(
                "/api/schema/:name",
                get(schema_get).put(schema_put).delete(schema_delete),
            )
            // Writes and deletes only look at the name segment
            .route(
                "/api/schema/:name/",
                get(utils::unknown_endpoint).put(schema_put).delete(schema_delete),
            )
            .route(
                "/api/schema/:name/*rest",
                get(utils::unknown_endpoint).put(schema_put).delete(schema_delete),
            )
            .layer(DefaultBodyLimit::max(body_limit))
            .with_state(self)
    }
}

/// Captures from the schema routes
#[derive(Debug, Deserialize)]
pub struct SchemaPath {
    pub name: String,
    /// Everything after the name, without the leading slash
    pub rest: Option<String>,
}
