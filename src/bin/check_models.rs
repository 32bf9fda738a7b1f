//! Lists the models the configured provider exposes.
//!
//! Uses the same configuration as the server, so it doubles as a check that
//! the credential and base URL are usable.

use anyhow::{Context, Result};
use bioscribe::{
    config,
    llm::{LlmClient, OpenAiClient},
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = config::load().await.context("Failed to load configuration")?;
    let client = OpenAiClient::new(config.llm.clone());

    println!("Attempting to list available models at {}...", config.llm.base_url);

    match client.list_models().await {
        Ok(models) => {
            for model in &models {
                let marker = if model.ends_with(client.model()) { " (configured)" } else { "" };
                println!("- {}{}", model, marker);
            }
            if models.is_empty() {
                println!("Provider returned no models.");
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
