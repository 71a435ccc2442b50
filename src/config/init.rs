// ABOUTME: Config scaffolding for new projects.
// ABOUTME: Creates launchpad.yml template files.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::AppName;

use super::{API_KEY_VAR, CONFIG_FILENAME, Config, SERVICE_ACCOUNT_KEY_VAR};

/// Write a `launchpad.yml` template into `dir`, returning its path.
pub fn init_config(dir: &Path, name: Option<&str>, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let mut config = Config::template();

    if let Some(n) = name {
        config.name = AppName::new(n).map_err(|e| Error::InvalidConfig(e.to_string()))?;
    }

    std::fs::write(&config_path, generate_template_yaml(&config))?;

    Ok(config_path)
}

fn generate_template_yaml(config: &Config) -> String {
    format!(
        r#"name: {}
# Credentials are read from the environment at deploy time.
api_key:
  env: {API_KEY_VAR}
service_account_key:
  env: {SERVICE_ACCOUNT_KEY_VAR}
# Container engine used to build and push: docker or podman
engine: {}
# api:
#   url: {}
#   timeout: 30s
"#,
        config.name, config.engine, config.api.url
    )
}
