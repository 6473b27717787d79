use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::RetryPolicy;
use crate::infrastructure::llm::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::infrastructure::observability::TracingConfig;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub proxy: ProxySettings,
    pub client: ClientSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamProvider {
    Gemini,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    pub provider: UpstreamProvider,
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key. The key itself
    /// is never part of the settings tree.
    pub api_key_env: String,
    pub timeout_secs: u64,
    pub mock_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProxySettings {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    pub proxy_url: String,
    pub request_timeout_secs: u64,
    pub extraction_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, then `appsettings.{environment}.toml` if it
    /// exists, then `APP__SECTION__KEY` environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Defaults only, ignoring files and environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::with_defaults(Config::builder())?
            .build()?
            .try_deserialize()
    }

    fn builder(
        environment: Environment,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Self::with_defaults(Config::builder())?.add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
        ))
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8888)?
            .set_default("server.max_body_bytes", 10 * 1024 * 1024)?
            .set_default("upstream.provider", "gemini")?
            .set_default("upstream.base_url", DEFAULT_BASE_URL)?
            .set_default("upstream.model", DEFAULT_MODEL)?
            .set_default("upstream.api_key_env", "GEMINI_API_KEY")?
            .set_default("upstream.timeout_secs", 120)?
            .set_default("upstream.mock_delay_ms", 0)?
            .set_default("proxy.max_retries", 2)?
            .set_default("proxy.initial_backoff_ms", 250)?
            .set_default("client.proxy_url", "http://127.0.0.1:8888/api/proxy")?
            .set_default("client.request_timeout_secs", 180)?
            .set_default("client.extraction_timeout_secs", 30)?
            .set_default("logging.level", "info,legalyze=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)
    }
}

impl UpstreamSettings {
    /// Reads the API key from the process environment.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }
}

impl ProxySettings {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            initial_backoff: Duration::from_millis(self.initial_backoff_ms),
        }
    }
}

impl ClientSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }
}

impl LoggingSettings {
    pub fn tracing_config(&self, environment: Environment) -> TracingConfig {
        TracingConfig {
            environment: environment.to_string(),
            default_filter: self.level.clone(),
            json_format: self.enable_json,
            use_stderr: false,
        }
    }
}
