// ABOUTME: Container engine selection for image builds.
// ABOUTME: Maps the configured engine to the CLI binary that gets invoked.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The container engine CLI used to build and push images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    Docker,
    Podman,
}

impl Engine {
    /// Name of the executable to run.
    pub fn program(&self) -> &'static str {
        match self {
            Engine::Docker => "docker",
            Engine::Podman => "podman",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}
