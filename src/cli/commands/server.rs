use reqwest::Method;
use serde_json::Value;

use crate::cli::utils::{output_success, ApiClient};
use crate::cli::OutputFormat;

/// GET /health on the selected server
pub async fn health(client: &ApiClient, output_format: OutputFormat) -> anyhow::Result<()> {
    let (_, text) = client.send(Method::GET, client.endpoint(&["health"])?, None).await?;
    let body: Value = serde_json::from_str(&text)?;

    let status = body
        .pointer("/data/status")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();

    output_success(
        output_format,
        &format!("{} is {}", client.base_url(), status),
        body.get("data").cloned(),
    )
}
