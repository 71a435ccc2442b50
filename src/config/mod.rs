// ABOUTME: Configuration types and parsing for launchpad.yml.
// ABOUTME: Handles YAML parsing, env var interpolation for credentials, and API settings.

mod deserialize;
mod env_value;
mod init;

pub use env_value::EnvValue;
pub use init::init_config;

use crate::api::{DEFAULT_API_URL, HttpTransport};
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::pipeline::PipelineSettings;
use crate::types::{AppName, Secret};
use deserialize::{deserialize_api_url, deserialize_app_name};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "launchpad.yml";
pub const CONFIG_FILENAME_ALT: &str = "launchpad.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".launchpad/config.yml";

pub const API_KEY_VAR: &str = "LAUNCHPAD_API_KEY";
pub const SERVICE_ACCOUNT_KEY_VAR: &str = "LAUNCHPAD_SERVICE_ACCOUNT_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(deserialize_with = "deserialize_app_name")]
    pub name: AppName,

    pub api_key: EnvValue,

    pub service_account_key: EnvValue,

    #[serde(default)]
    pub engine: Engine,

    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url", deserialize_with = "deserialize_api_url")]
    pub url: String,

    #[serde(default = "default_api_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout: default_api_timeout(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_api_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading configuration");
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Default configuration written by `launchpad init`. Credentials are
    /// read from the environment.
    pub fn template() -> Self {
        Self {
            name: AppName::placeholder(),
            api_key: EnvValue::from_env(API_KEY_VAR),
            service_account_key: EnvValue::from_env(SERVICE_ACCOUNT_KEY_VAR),
            engine: Engine::default(),
            api: ApiConfig::default(),
        }
    }

    /// HTTP transport for the configured API host and timeout.
    pub fn transport(&self) -> Result<HttpTransport> {
        Ok(HttpTransport::new(&self.api.url, self.api.timeout)?)
    }

    /// Resolve credentials and build the pipeline inputs.
    pub fn settings(&self) -> Result<PipelineSettings> {
        Ok(PipelineSettings {
            name: self.name.clone(),
            api_key: Secret::new(self.api_key.resolve()?),
            service_account_key: Secret::new(self.service_account_key.resolve()?),
            engine: self.engine,
        })
    }
}
