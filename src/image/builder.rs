// ABOUTME: Setup-gated wrapper around the container engine CLI.
// ABOUTME: setup() probes buildx and logs in; build_and_push() exists only once Ready.

use crate::engine::Engine;
use crate::exec::{CommandOutput, CommandRunner, ExecOptions};
use crate::lifecycle::Lifecycle;

use super::error::ImageError;
use super::state::{Ready, Uninitialized};
use super::target::BuildTarget;

/// Account name used when logging in with a service-account JSON key.
pub const LOGIN_ACCOUNT: &str = "_json_key";

/// Registry endpoint passed to `login`.
pub const LOGIN_SERVER: &str = "https://gcr.io";

/// Result of [`ImageBuilder::setup`]. On failure the untouched builder is
/// handed back with the error.
pub type SetupResult = Result<ImageBuilder<Ready>, (ImageBuilder<Uninitialized>, ImageError)>;

/// Builds and pushes the image for a [`BuildTarget`].
///
/// The state parameter `S` is [`Uninitialized`] until [`setup`](Self::setup)
/// succeeds. `build_and_push` is only defined for `ImageBuilder<Ready>`:
///
/// ```compile_fail,E0599
/// use launchpad::exec::ProcessRunner;
/// use launchpad::image::{BuildTarget, ImageBuilder};
/// use launchpad::types::Secret;
///
/// let target = BuildTarget::new("api", "proj1", "teamA", Secret::new("key"), "abc123");
/// let builder = ImageBuilder::new(target);
/// let _ = builder.build_and_push(&ProcessRunner);
/// ```
#[derive(Debug)]
pub struct ImageBuilder<S> {
    engine: Engine,
    target: BuildTarget,
    state: S,
}

impl ImageBuilder<Uninitialized> {
    /// Create a builder that drives `docker`.
    pub fn new(target: BuildTarget) -> Self {
        Self::with_engine(target, Engine::default())
    }

    pub fn with_engine(target: BuildTarget, engine: Engine) -> Self {
        ImageBuilder {
            engine,
            target,
            state: Uninitialized,
        }
    }

    /// Probe for buildx, log in to the registry, and become Ready.
    ///
    /// If the probe reports buildx missing, login is never attempted.
    pub async fn setup<R>(self, runner: &R) -> SetupResult
    where
        R: CommandRunner + ?Sized,
    {
        let probed = self.check_buildx(runner).await;
        if let Err(e) = probed {
            return Err((self, e));
        }

        let logged_in = self.login(runner).await;
        if let Err(e) = logged_in {
            return Err((self, e));
        }

        tracing::info!(engine = %self.engine, "image builder ready");

        Ok(ImageBuilder {
            engine: self.engine,
            target: self.target,
            state: Ready,
        })
    }

    async fn check_buildx<R>(&self, runner: &R) -> Result<(), ImageError>
    where
        R: CommandRunner + ?Sized,
    {
        let output = runner
            .run(self.engine.program(), &["buildx"], ExecOptions::probe())
            .await?;

        if buildx_unavailable(&output) {
            return Err(ImageError::CapabilityUnavailable {
                engine: self.engine,
                stderr: output.stderr.trim().to_string(),
            });
        }

        if !output.success() {
            tracing::debug!(
                exit_code = ?output.exit_code,
                "buildx probe exited non-zero without error output, treating as available"
            );
        }

        Ok(())
    }
}

impl<S> ImageBuilder<S> {
    /// Authenticate the engine against the registry with the service-account key.
    pub async fn login<R>(&self, runner: &R) -> Result<(), ImageError>
    where
        R: CommandRunner + ?Sized,
    {
        tracing::info!(server = LOGIN_SERVER, "logging in to registry");

        runner
            .run(
                self.engine.program(),
                &[
                    "login",
                    "-u",
                    LOGIN_ACCOUNT,
                    "-p",
                    self.target.service_account_key().expose(),
                    LOGIN_SERVER,
                ],
                ExecOptions::default(),
            )
            .await?;

        Ok(())
    }

    /// Image tag, derived from the target on every call.
    pub fn tag(&self) -> String {
        self.target.tag()
    }

    pub fn target(&self) -> &BuildTarget {
        &self.target
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }
}

impl<S: Lifecycle> ImageBuilder<S> {
    pub fn is_ready(&self) -> bool {
        S::READY
    }
}

impl ImageBuilder<Ready> {
    /// Build the current directory under [`tag`](Self::tag), then push it.
    ///
    /// The push only runs after the build succeeded.
    pub async fn build_and_push<R>(&self, runner: &R) -> Result<(), ImageError>
    where
        R: CommandRunner + ?Sized,
    {
        let tag = self.tag();
        let program = self.engine.program();

        tracing::info!(%tag, "building image");
        runner
            .run(program, &["build", "-t", tag.as_str(), "."], ExecOptions::default())
            .await?;

        tracing::info!(%tag, "pushing image");
        runner
            .run(program, &["push", tag.as_str()], ExecOptions::default())
            .await?;

        Ok(())
    }
}

/// Probe policy for `<engine> buildx`: only a non-zero exit that also wrote to
/// stderr counts as missing. A silent non-zero exit is treated as present.
pub fn buildx_unavailable(output: &CommandOutput) -> bool {
    !output.success() && !output.stderr.is_empty()
}
