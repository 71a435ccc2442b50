// ABOUTME: Container image build and push using the type state pattern.
// ABOUTME: Exports the ImageBuilder, its state markers, and the BuildTarget tag derivation.

mod builder;
mod error;
mod state;
mod target;

pub use builder::{ImageBuilder, LOGIN_ACCOUNT, LOGIN_SERVER, SetupResult, buildx_unavailable};
pub use error::ImageError;
pub use state::{Ready, Uninitialized};
pub use target::{BuildTarget, REGISTRY_HOST, REGISTRY_NAMESPACE};
