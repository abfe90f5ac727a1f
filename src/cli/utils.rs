use anyhow::Context;
use reqwest::{header::CONTENT_TYPE, Method, Response, StatusCode};
use serde_json::{json, Value};
use url::Url;

use crate::cli::OutputFormat;

/// Thin HTTP client for a Datagen API server
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid server URL '{}'", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("server URL '{}' cannot carry a path", base_url);
        }

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append `segments` to the base URL, percent-encoding each one
    pub fn endpoint(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("server URL '{}' cannot carry a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and return the status with the response text.
    /// Non-success statuses become errors carrying the server's message.
    pub async fn send(
        &self,
        method: Method,
        url: Url,
        yaml_body: Option<String>,
    ) -> anyhow::Result<(StatusCode, String)> {
        let target = url.to_string();
        let mut request = self.http.request(method.clone(), url);
        if let Some(body) = yaml_body {
            request = request.header(CONTENT_TYPE, "application/yaml").body(body);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("{} {} failed", method, target))?;

        read_response(response).await
    }
}

async fn read_response(response: Response) -> anyhow::Result<(StatusCode, String)> {
    let status = response.status();
    let text = response.text().await.context("failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("{} {}", status.as_u16(), text.trim_end());
    }
    Ok((status, text))
}

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(data_value) = data {
                response["data"] = data_value;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(
            client.endpoint(&["health"]).unwrap().as_str(),
            "http://localhost:3000/health"
        );
    }

    #[test]
    fn test_endpoint_encodes_each_segment() {
        let client = ApiClient::new("http://localhost:3000").unwrap();
        assert_eq!(
            client.endpoint(&["api", "schema", "demo"]).unwrap().as_str(),
            "http://localhost:3000/api/schema/demo"
        );
        assert_eq!(
            client.endpoint(&["api", "schema", "a/b c"]).unwrap().as_str(),
            "http://localhost:3000/api/schema/a%2Fb%20c"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ApiClient::new("http://proxy.example/datagen/").unwrap();
        assert_eq!(
            client.endpoint(&["health"]).unwrap().as_str(),
            "http://proxy.example/datagen/health"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(ApiClient::new("not a url").is_err());
        assert!(ApiClient::new("mailto:ops@example.com").is_err());
    }
}
