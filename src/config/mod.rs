mod types;

pub use types::*;

use crate::Result;
use std::env;
use tracing::debug;

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Loads `.env`, then the optional YAML file at `CONFIG_PATH`, then applies
/// environment overrides.
pub async fn load() -> Result<Config> {
    dotenv::dotenv().ok();

    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_file(&config_path).await?;

    apply_overrides(
        &mut config,
        env::var(API_KEY_VAR).ok(),
        env::var("HOST").ok(),
        env::var("PORT").ok(),
    )?;

    Ok(config)
}

/// Reads `path` if it exists; a missing file yields the defaults.
pub async fn load_file(path: &str) -> Result<Config> {
    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path);
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path);
    let config_str = tokio::fs::read_to_string(path).await?;
    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to `null`, not to an empty map.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

pub fn apply_overrides(
    config: &mut Config,
    api_key: Option<String>,
    host: Option<String>,
    port: Option<String>,
) -> Result<()> {
    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        config.llm.api_key = Some(key);
    }
    if config.llm.api_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
        config.llm.api_key = None;
    }
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port
            .parse()
            .map_err(|_| crate::Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }
    Ok(())
}
