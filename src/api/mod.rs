// ABOUTME: Launchpad deployment API client using the type state pattern.
// ABOUTME: Exports the DeploymentClient, its states, wire types, and the HTTP transport.

mod client;
mod state;
mod transport;
mod types;

pub use client::{DEFAULT_API_URL, DeploymentClient, SetupResult};
pub use state::{Ready, Uninitialized};
pub use transport::{ApiTransport, HttpTransport, TransportError};
pub use types::{Deployment, DeploymentRequest, Organization};
