pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "datagen")]
#[command(about = "Datagen CLI - manage schemas on a Datagen API server")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "DATAGEN_SERVER",
        default_value = "http://127.0.0.1:3000",
        help = "Base URL of the Datagen API server"
    )]
    pub server: String,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Schema document management")]
    Schema {
        #[command(subcommand)]
        cmd: commands::schema::SchemaCommands,
    },

    #[command(about = "Check server health status from API /health endpoint")]
    Health,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = utils::ApiClient::new(&cli.server)?;

    match cli.command {
        Commands::Schema { cmd } => commands::schema::handle(cmd, &client, output_format).await,
        Commands::Health => commands::server::health(&client, output_format).await,
    }
}
