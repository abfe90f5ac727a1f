use clap::Parser;

use datagen_api::{config, logging, server};

#[derive(Parser)]
#[command(name = "datagen-api")]
#[command(about = "Serve named data-generation schemas over HTTP")]
#[command(version)]
struct Args {
    #[arg(long, help = "Address to bind (overrides DATAGEN_HOST)")]
    host: Option<String>,

    #[arg(long, help = "Port to listen on (overrides DATAGEN_PORT / PORT)")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATAGEN_PORT, RUST_LOG, etc.
    let _ = dotenvy::dotenv();

    logging::init();

    let args = Args::parse();

    let mut config = config::config().clone();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Starting Datagen API in {:?} mode", config.environment);

    server::serve(&config).await
}
