// ABOUTME: End-to-end deploy pipeline: resolve organization, build and push, register.
// ABOUTME: Stage-tagged errors use the SNAFU pattern for programmatic handling.

use snafu::{ResultExt, Snafu};

use crate::api::{ApiTransport, Deployment, DeploymentClient, TransportError};
use crate::context::InvocationContext;
use crate::engine::Engine;
use crate::exec::CommandRunner;
use crate::image::{BuildTarget, ImageBuilder, ImageError};
use crate::output::Output;
use crate::types::{AppName, Secret};

/// Failure of one pipeline stage. The source error is kept unchanged.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum PipelineError {
    #[snafu(display("organization lookup failed: {source}"))]
    Organization { source: TransportError },

    #[snafu(display("image builder setup failed: {source}"))]
    BuilderSetup { source: ImageError },

    #[snafu(display("image build or push failed: {source}"))]
    BuildAndPush { source: ImageError },

    #[snafu(display("deployment registration failed: {source}"))]
    Registration { source: TransportError },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineErrorKind {
    /// The container engine cannot build images.
    CapabilityUnavailable,
    /// An engine command or API request failed.
    TransportFailure,
}

impl PipelineError {
    pub fn kind(&self) -> PipelineErrorKind {
        match self {
            PipelineError::BuilderSetup {
                source: ImageError::CapabilityUnavailable { .. },
            } => PipelineErrorKind::CapabilityUnavailable,
            _ => PipelineErrorKind::TransportFailure,
        }
    }
}

/// Inputs for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub name: AppName,
    pub api_key: Secret,
    pub service_account_key: Secret,
    pub engine: Engine,
}

/// Run the whole deploy for the current commit.
///
/// Steps run strictly in order and stop at the first failure:
/// organization lookup, builder setup, build and push, registration.
pub async fn run<R, T>(
    settings: &PipelineSettings,
    context: &InvocationContext,
    runner: &R,
    transport: &T,
    output: &Output,
) -> Result<Deployment, PipelineError>
where
    R: CommandRunner + ?Sized,
    T: ApiTransport + ?Sized,
{
    output.progress("  → Resolving organization...");
    let client = DeploymentClient::new(settings.api_key.clone(), settings.name.as_str(), context)
        .setup(transport)
        .await
        .map_err(|(_, e)| e)
        .context(OrganizationSnafu)?;

    let target = BuildTarget::new(
        settings.name.as_str(),
        client.project_id(),
        client.slug_id(),
        settings.service_account_key.clone(),
        context.commit_sha.as_str(),
    );

    output.progress(&format!("  → Preparing {}...", settings.engine));
    let builder = ImageBuilder::with_engine(target, settings.engine)
        .setup(runner)
        .await
        .map_err(|(_, e)| e)
        .context(BuilderSetupSnafu)?;

    output.progress(&format!("  → Building and pushing {}...", builder.tag()));
    builder
        .build_and_push(runner)
        .await
        .context(BuildAndPushSnafu)?;

    output.progress("  → Registering deployment...");
    client
        .create_deployment(transport)
        .await
        .context(RegistrationSnafu)
}
