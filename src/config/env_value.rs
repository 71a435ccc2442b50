// ABOUTME: Credential values in config: literals or references to environment variables.
// ABOUTME: Literal values are redacted from Debug output.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;

#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Literal(String),
    FromEnv {
        #[serde(rename = "env")]
        var: String,
        #[serde(default)]
        default: Option<String>,
    },
}

impl EnvValue {
    /// Reference to `var` with no fallback.
    pub fn from_env(var: &str) -> Self {
        EnvValue::FromEnv {
            var: var.to_string(),
            default: None,
        }
    }

    /// Resolve against the process environment.
    pub fn resolve(&self) -> Result<String> {
        self.resolve_with(|var| std::env::var(var).ok())
    }

    /// Resolve using `lookup` for environment references. An unset or empty
    /// variable falls back to the default, if any.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        match self {
            EnvValue::Literal(s) => Ok(s.clone()),
            EnvValue::FromEnv { var, default } => lookup(var)
                .filter(|value| !value.is_empty())
                .or_else(|| default.clone())
                .ok_or_else(|| Error::MissingEnvVar(var.clone())),
        }
    }
}

impl fmt::Debug for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvValue::Literal(_) => f.write_str("Literal(***)"),
            EnvValue::FromEnv { var, default } => f
                .debug_struct("FromEnv")
                .field("var", var)
                .field("default", &default.as_ref().map(|_| "***"))
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_resolves_to_itself() {
        let value = EnvValue::Literal("abc".to_string());
        assert_eq!(value.resolve_with(|_| None).unwrap(), "abc");
    }

    #[test]
    fn env_reference_uses_lookup_then_default() {
        let value = EnvValue::FromEnv {
            var: "KEY".to_string(),
            default: Some("fallback".to_string()),
        };
        assert_eq!(
            value.resolve_with(|_| Some("set".to_string())).unwrap(),
            "set"
        );
        assert_eq!(value.resolve_with(|_| None).unwrap(), "fallback");
        assert_eq!(
            value.resolve_with(|_| Some(String::new())).unwrap(),
            "fallback"
        );
    }

    #[test]
    fn missing_env_reference_names_variable() {
        let err = EnvValue::from_env("LAUNCHPAD_NOPE")
            .resolve_with(|_| None)
            .unwrap_err();
        assert!(matches!(err, Error::MissingEnvVar(ref var) if var == "LAUNCHPAD_NOPE"));
    }

    #[test]
    fn debug_redacts_literals() {
        let value = EnvValue::Literal("top-secret".to_string());
        assert!(!format!("{value:?}").contains("top-secret"));
    }
}
