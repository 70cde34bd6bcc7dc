use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::forward::DISCORD_WEBHOOK_BASE;

/// Environment variable holding the inbound bearer secret. Takes precedence
/// over `auth_token` in the config file so deployments can keep the secret
/// out of files.
pub const TOKEN_ENV_VAR: &str = "FORWARDER_TOKEN";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub discord_base_url: String,
    pub auth_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Config {
    #[serde(default)]
    server: ServerConfig,
}

impl ServerConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config.server)
    }

    /// Resolve the bearer secret inbound requests must present. Without one
    /// the service cannot authenticate anything, so absence is an error.
    pub fn resolve_token(&self) -> Result<String> {
        self.resolve_token_from(std::env::var(TOKEN_ENV_VAR).ok())
    }

    fn resolve_token_from(&self, env_token: Option<String>) -> Result<String> {
        if let Some(token) = env_token.filter(|token| !token.is_empty()) {
            return Ok(token);
        }

        self.auth_token
            .clone()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No auth token configured: set {} or server.auth_token",
                    TOKEN_ENV_VAR
                )
            })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            discord_base_url: DISCORD_WEBHOOK_BASE.to_string(),
            auth_token: None,
        }
    }
}
