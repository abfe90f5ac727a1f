use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

use datagen_api::config::AppConfig;
use datagen_api::handlers::SchemaEndpoint;
use datagen_api::logging::MemoryLog;
use datagen_api::schema::MemoryStore;
use datagen_api::server;

static SERVER: OnceLock<TestServer> = OnceLock::new();

/// Server running inside the test process on its own thread and runtime,
/// so it outlives individual `#[tokio::test]` runtimes and dies with the process.
pub struct TestServer {
    #[allow(dead_code)]
    pub port: u16,
    pub base_url: String,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut config = AppConfig::development();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = port;
        config.api.enable_request_logging = false;

        // Bind before returning so requests never race the listener
        let listener = std::net::TcpListener::bind(config.server.bind_addr())
            .with_context(|| format!("failed to bind {}", config.server.bind_addr()))?;
        listener.set_nonblocking(true)?;

        std::thread::Builder::new()
            .name("datagen-api-test".to_string())
            .spawn(move || {
                let runtime = tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .build()
                    .expect("failed to build server runtime");

                runtime.block_on(async move {
                    let listener = tokio::net::TcpListener::from_std(listener)
                        .expect("failed to adopt test listener");
                    let endpoint = SchemaEndpoint::new(
                        Arc::new(MemoryStore::new()),
                        Arc::new(MemoryLog::new()),
                        config.api.max_request_size_bytes,
                    );
                    server::run(listener, endpoint, &config, std::future::pending())
                        .await
                        .expect("test server stopped");
                });
            })
            .context("failed to start server thread")?;

        Ok(Self { port, base_url })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    #[allow(dead_code)]
    pub fn schema_url(&self, name: &str) -> String {
        format!("{}/api/schema/{}", self.base_url, name)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    // Use stable get_or_init and convert init errors into a panic with context.
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to start test server"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Schema name unique to one test, so tests can share a server
#[allow(dead_code)]
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}
