// ABOUTME: Selects LP_ENV_ prefixed variables to forward to the deployed application.
// ABOUTME: Renders them as a comma-separated KEY=value list.

use std::collections::BTreeMap;

pub const ENV_PREFIX: &str = "LP_ENV_";

/// Keep variables whose name starts with `LP_ENV_` and render them as
/// `KEY=value` pairs joined by `,`, ordered by name.
pub fn parse_env_vars<I, K, V>(vars: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let selected: BTreeMap<String, String> = vars
        .into_iter()
        .filter(|(key, _)| key.as_ref().starts_with(ENV_PREFIX))
        .map(|(key, value)| (key.as_ref().to_string(), value.as_ref().to_string()))
        .collect();

    selected
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// [`parse_env_vars`] over the current process environment.
pub fn from_process_env() -> String {
    parse_env_vars(std::env::vars())
}
