// ABOUTME: Setup-gated client for registering deployments with the Launchpad API.
// ABOUTME: setup() resolves the organization; create_deployment() exists only once Ready.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::context::InvocationContext;
use crate::lifecycle::Lifecycle;
use crate::types::Secret;

use super::state::{Ready, Uninitialized};
use super::transport::{ApiTransport, TransportError};
use super::types::{Deployment, DeploymentRequest, Organization};

/// Default Launchpad API host.
pub const DEFAULT_API_URL: &str = "https://alpha-launchpad.bluenova-app.com";

/// Result of [`DeploymentClient::setup`]. On failure the untouched client is
/// handed back with the error.
pub type SetupResult =
    Result<DeploymentClient<Ready>, (DeploymentClient<Uninitialized>, TransportError)>;

/// Registers deployments for one application and commit.
///
/// Starts [`Uninitialized`]; [`setup`](Self::setup) resolves the organization
/// and yields a `DeploymentClient<Ready>`, the only state with
/// `create_deployment`:
///
/// ```compile_fail,E0599
/// use launchpad::api::{DeploymentClient, HttpTransport};
/// use launchpad::context::InvocationContext;
/// use launchpad::types::Secret;
/// use std::time::Duration;
///
/// let context = InvocationContext::new("abc123", "widgets", "main");
/// let client = DeploymentClient::new(Secret::new("key"), "api", &context);
/// let transport = HttpTransport::new("https://api.example.com", Duration::from_secs(5)).unwrap();
/// let _ = client.create_deployment(&transport);
/// ```
#[derive(Debug)]
pub struct DeploymentClient<S> {
    request: DeploymentRequest,
    state: S,
}

impl DeploymentClient<Uninitialized> {
    /// Capture the request context. Repository, branch and commit are taken
    /// from `context` now and never re-read.
    pub fn new(api_key: Secret, name: impl Into<String>, context: &InvocationContext) -> Self {
        DeploymentClient {
            request: DeploymentRequest::new(api_key, name, context),
            state: Uninitialized,
        }
    }

    /// Look up the organization for the API key and become Ready.
    pub async fn setup<T>(self, transport: &T) -> SetupResult
    where
        T: ApiTransport + ?Sized,
    {
        let lookup = self.read_organization(transport).await;
        match lookup {
            Ok(organization) => {
                tracing::info!(
                    project_id = %organization.project_id,
                    slug_id = %organization.slug_id,
                    "resolved organization"
                );
                Ok(DeploymentClient {
                    request: self.request,
                    state: Ready::new(organization),
                })
            }
            Err(e) => Err((self, e)),
        }
    }

    async fn read_organization<T>(&self, transport: &T) -> Result<Organization, TransportError>
    where
        T: ApiTransport + ?Sized,
    {
        let path = format!(
            "/organizations/{}",
            urlencoding::encode(self.request.api_key().expose())
        );
        decode(transport.get(&path).await?)
    }
}

impl<S> DeploymentClient<S> {
    pub fn request(&self) -> &DeploymentRequest {
        &self.request
    }
}

impl<S: Lifecycle> DeploymentClient<S> {
    pub fn is_ready(&self) -> bool {
        S::READY
    }
}

impl DeploymentClient<Ready> {
    pub fn organization(&self) -> &Organization {
        self.state.organization()
    }

    pub fn project_id(&self) -> &str {
        &self.organization().project_id
    }

    pub fn slug_id(&self) -> &str {
        &self.organization().slug_id
    }

    /// Register a deployment for the captured name, repository, branch and
    /// commit. Every call issues a new request.
    pub async fn create_deployment<T>(&self, transport: &T) -> Result<Deployment, TransportError>
    where
        T: ApiTransport + ?Sized,
    {
        tracing::info!(
            name = self.request.name(),
            branch = self.request.branch(),
            commit = self.request.commit(),
            "registering deployment"
        );

        let body = serde_json::to_value(self.request.body())
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        decode(transport.post("/deployments", body).await?)
    }
}

fn decode<D: DeserializeOwned>(value: Value) -> Result<D, TransportError> {
    serde_json::from_value(value).map_err(|e| TransportError::Decode(e.to_string()))
}
