use url::Url;

use crate::domains::trending::CarouselTimings;
use crate::infra::api_client::StoryApiClient;
use crate::infra::runtime_config::RuntimeConfig;
use crate::infra::services::FetchResult;

pub const ENV_SERVER_URL: &str = "STORYLINE_SERVER_URL";
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server URL {raw:?}: {source}")]
    InvalidServerUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Server URL must use http or https, got {0:?}")]
    UnsupportedScheme(String),
}

/// Application level configuration for embedding the UI core
#[derive(Debug, Clone)]
pub struct AppConfig {
    server_url: Url,
    runtime: RuntimeConfig,
}

impl AppConfig {
    pub fn new(server_url: Url, runtime: RuntimeConfig) -> Self {
        Self {
            server_url,
            runtime,
        }
    }

    pub fn from_environment() -> Result<Self, ConfigError> {
        let raw = std::env::var(ENV_SERVER_URL)
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        Ok(Self {
            server_url: parse_server_url(&raw)?,
            runtime: RuntimeConfig::from_environment(),
        })
    }

    pub fn server_url(&self) -> &Url {
        &self.server_url
    }

    pub fn runtime(&self) -> &RuntimeConfig {
        &self.runtime
    }

    pub fn carousel_timings(&self) -> CarouselTimings {
        self.runtime.carousel_timings()
    }

    /// HTTP story provider for the configured server
    pub fn story_client(&self) -> FetchResult<StoryApiClient> {
        StoryApiClient::new(self.server_url.clone())
    }
}

pub fn parse_server_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| {
        ConfigError::InvalidServerUrl {
            raw: raw.to_string(),
            source,
        }
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}
