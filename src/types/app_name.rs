// ABOUTME: Application name validation for image paths.
// ABOUTME: Names become a repository path component, so they follow registry naming rules.

use std::fmt;
use thiserror::Error;

const MAX_LEN: usize = 128;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppNameError {
    #[error("application name cannot be empty")]
    Empty,

    #[error("application name exceeds maximum length of 128 characters")]
    TooLong,

    #[error("application name must start and end with a letter or digit")]
    BadBoundary,

    #[error("application name must be lowercase")]
    NotLowercase,

    #[error("invalid character in application name: '{0}'")]
    InvalidChar(char),
}

/// Name of the application being deployed.
///
/// Used verbatim as the last path component of the image repository, so it
/// accepts lowercase letters, digits, and the separators `.`, `_` and `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    pub fn new(value: &str) -> Result<Self, AppNameError> {
        if value.is_empty() {
            return Err(AppNameError::Empty);
        }

        if value.len() > MAX_LEN {
            return Err(AppNameError::TooLong);
        }

        for c in value.chars() {
            if c.is_ascii_uppercase() {
                return Err(AppNameError::NotLowercase);
            }
            if !c.is_ascii_lowercase() && !c.is_ascii_digit() && !matches!(c, '.' | '_' | '-') {
                return Err(AppNameError::InvalidChar(c));
            }
        }

        let alnum = |c: char| c.is_ascii_alphanumeric();
        if !value.starts_with(alnum) || !value.ends_with(alnum) {
            return Err(AppNameError::BadBoundary);
        }

        Ok(Self(value.to_string()))
    }

    /// Placeholder written into fresh config templates.
    pub(crate) fn placeholder() -> Self {
        Self("app".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
