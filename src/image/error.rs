// ABOUTME: Error types for image builder operations.
// ABOUTME: Command failures pass through unchanged; a missing buildx gets its own variant.

use crate::engine::Engine;
use crate::exec::ExecError;

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// The engine's buildx subsystem did not answer the probe.
    #[error("{engine} buildx is not available, unable to build images: {stderr}")]
    CapabilityUnavailable { engine: Engine, stderr: String },

    /// An engine command failed to start or exited non-zero.
    #[error(transparent)]
    Command(#[from] ExecError),
}
