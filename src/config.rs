use serde::{Deserialize, Serialize};
use std::env;

use crate::models::MAX_RESULT_COUNT;

pub const DEFAULT_BING_ENDPOINT: &str = "https://api.bing.microsoft.com/v7.0/search";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub bing: BingConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub max_json_payload_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BingConfig {
    /// Subscription key sent as `Ocp-Apim-Subscription-Key`. Searches fail
    /// with a configuration error while this is unset.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub endpoint: String,
    pub text_format: String,
    pub default_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                workers: num_cpus::get(),
                max_json_payload_size: 64 * 1024,
            },
            bing: BingConfig::default(),
            security: SecurityConfig {
                allowed_origins: vec!["*".to_string()],
            },
        }
    }
}

impl Default for BingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_BING_ENDPOINT.to_string(),
            text_format: "HTML".to_string(),
            default_count: 10,
        }
    }
}

impl BingConfig {
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from defaults overridden by whatever `lookup` returns
    /// for each known variable name.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Server configuration
        if let Some(host) = lookup("HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.server.port = port.parse()?;
        }
        if let Some(workers) = lookup("WORKERS") {
            config.server.workers = workers.parse()?;
        }
        if let Some(max_json_payload_size) = lookup("MAX_JSON_PAYLOAD_SIZE") {
            config.server.max_json_payload_size = max_json_payload_size.parse()?;
        }

        // Bing configuration
        if let Some(api_key) = lookup("BING_API_KEY") {
            if !api_key.trim().is_empty() {
                config.bing.api_key = Some(api_key);
            }
        }
        if let Some(endpoint) = lookup("BING_ENDPOINT") {
            config.bing.endpoint = endpoint;
        }
        if let Some(text_format) = lookup("BING_TEXT_FORMAT") {
            config.bing.text_format = text_format;
        }
        if let Some(default_count) = lookup("DEFAULT_RESULT_COUNT") {
            config.bing.default_count = default_count.parse()?;
            if !(1..=MAX_RESULT_COUNT).contains(&config.bing.default_count) {
                anyhow::bail!(
                    "DEFAULT_RESULT_COUNT must be between 1 and {}",
                    MAX_RESULT_COUNT
                );
            }
        }

        // Security configuration
        if let Some(allowed_origins) = lookup("ALLOWED_ORIGINS") {
            config.security.allowed_origins = allowed_origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        Ok(config)
    }
}
