// ABOUTME: Init command implementation.
// ABOUTME: Writes a launchpad.yml template into the working directory.

use launchpad::config::init_config;
use launchpad::error::Result;
use launchpad::output::Output;
use std::path::Path;

pub fn init(cwd: &Path, name: Option<&str>, force: bool, output: &Output) -> Result<()> {
    let path = init_config(cwd, name, force)?;
    output.success(&format!("Created {}", path.display()));
    Ok(())
}
