// ABOUTME: Deploy command implementation.
// ABOUTME: Loads config and CI context, then runs the build/push/register pipeline.

use launchpad::config::Config;
use launchpad::context::InvocationContext;
use launchpad::error::{Error, Result};
use launchpad::exec::ProcessRunner;
use launchpad::output::Output;
use launchpad::pipeline;
use launchpad::types::AppName;
use std::path::Path;

/// Build, push, and register the current commit.
pub async fn deploy(
    cwd: &Path,
    config_path: Option<&Path>,
    name: Option<&str>,
    mut output: Output,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::discover(cwd)?,
    };

    if let Some(name) = name {
        config.name = AppName::new(name).map_err(|e| Error::InvalidConfig(e.to_string()))?;
    }

    let context = InvocationContext::from_env()?;
    let settings = config.settings()?;
    let transport = config.transport()?;

    output.start_timer();
    output.progress(&format!(
        "Deploying {} ({}@{}) from {}",
        settings.name, context.repository, context.branch, context.commit_sha
    ));

    let deployment =
        pipeline::run(&settings, &context, &ProcessRunner, &transport, &output).await?;

    output.deployed(&deployment);
    Ok(())
}
