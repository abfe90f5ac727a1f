// Application assembly: routes, middleware and the listener
use std::future::Future;
use std::sync::Arc;

use axum::{extract::State, http::HeaderValue, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::handlers::SchemaEndpoint;
use crate::logging::TracingLog;
use crate::schema::{MemoryStore, SchemaStore};

/// Build the full application router around `endpoint`
pub fn app(endpoint: SchemaEndpoint, config: &AppConfig) -> Router {
    let info = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(endpoint.store.clone());

    let mut router = Router::new().merge(info).merge(endpoint.routes());

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::permissive().allow_origin(AllowOrigin::list(allowed))
}

/// Bind the configured address and serve a fresh in-memory store until Ctrl-C
pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let endpoint = SchemaEndpoint::new(
        Arc::new(MemoryStore::new()),
        Arc::new(TracingLog),
        config.api.max_request_size_bytes,
    );

    let bind_addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    run(listener, endpoint, config, shutdown_signal()).await
}

/// Serve `endpoint` on an already bound listener until `shutdown` resolves
pub async fn run(
    listener: tokio::net::TcpListener,
    endpoint: SchemaEndpoint,
    config: &AppConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    tracing::info!("Datagen API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app(endpoint, config))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Datagen API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn root(State(store): State<Arc<dyn SchemaStore>>) -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");
    let schemas = store.names().await.len();

    Json(json!({
        "success": true,
        "data": {
            "name": "Datagen API",
            "version": version,
            "description": "Named data-generation schema documents",
            "schemas": schemas,
            "endpoints": {
                "home": "/",
                "health": "/health",
                "schema": "/api/schema/:name (GET, PUT, DELETE)",
            }
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
        }
    }))
}
