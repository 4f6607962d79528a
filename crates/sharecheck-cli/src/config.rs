//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use sharecheck_core::Provider;

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the analysis service
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Default analysis provider
    #[serde(default)]
    pub provider: Provider,
}

impl ClientConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &crate::Cli) -> anyhow::Result<Self> {
        // Try to load from file, or use defaults
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)?
        } else {
            Self::default()
        };

        // Apply CLI overrides
        if let Some(server) = &cli.server {
            config.server_url = server.clone();
        }

        if let Some(provider) = cli.provider {
            config.provider = provider;
        }

        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            provider: Provider::default(),
        }
    }
}

fn default_server_url() -> String {
    "http://127.0.0.1:8000".to_string()
}
