use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use reqwest::Method;
use serde_json::json;
use url::Url;

use crate::cli::utils::{output_success, ApiClient};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum SchemaCommands {
    #[command(about = "Print a schema as YAML")]
    Get {
        #[arg(help = "Schema name")]
        name: String,
    },

    #[command(about = "Create or replace a schema from a YAML file or stdin")]
    Put {
        #[arg(help = "Schema name")]
        name: String,
        #[arg(long, short, help = "Read the schema from this file instead of stdin")]
        file: Option<PathBuf>,
    },

    #[command(about = "Delete a schema")]
    Delete {
        #[arg(help = "Schema name")]
        name: String,
    },
}

fn schema_url(client: &ApiClient, name: &str) -> anyhow::Result<Url> {
    client.endpoint(&["api", "schema", name])
}

pub async fn handle(
    cmd: SchemaCommands,
    client: &ApiClient,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        SchemaCommands::Get { name } => {
            let (_, yaml) = client.send(Method::GET, schema_url(client, &name)?, None).await?;
            match output_format {
                OutputFormat::Json => {
                    let value: serde_json::Value = serde_yaml::from_str(&yaml)
                        .context("server returned invalid YAML")?;
                    println!("{}", serde_json::to_string_pretty(&value)?);
                }
                OutputFormat::Text => print!("{}", yaml),
            }
            Ok(())
        }
        SchemaCommands::Put { name, file } => {
            let body = read_schema(file.as_ref())?;
            let (status, text) = client.send(Method::PUT, schema_url(client, &name)?, Some(body)).await?;
            output_success(
                output_format,
                text.trim_end(),
                Some(json!({ "name": name, "status": status.as_u16() })),
            )
        }
        SchemaCommands::Delete { name } => {
            let (status, text) = client.send(Method::DELETE, schema_url(client, &name)?, None).await?;
            output_success(
                output_format,
                text.trim_end(),
                Some(json!({ "name": name, "status": status.as_u16() })),
            )
        }
    }
}

fn read_schema(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read schema from stdin")?;
            Ok(buf)
        }
    }
}
