// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Validates application names and API URLs while parsing.

use serde::Deserialize;

use crate::types::AppName;

pub fn deserialize_app_name<'de, D>(deserializer: D) -> Result<AppName, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    AppName::new(&s).map_err(serde::de::Error::custom)
}

pub fn deserialize_api_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if !s.starts_with("https://") && !s.starts_with("http://") {
        return Err(serde::de::Error::custom(format!(
            "API url must start with http:// or https://: {s}"
        )));
    }
    Ok(s.trim_end_matches('/').to_string())
}
