// ABOUTME: Process execution collaborator for container engine commands.
// ABOUTME: Defines the CommandRunner trait and its tokio-backed implementation.

mod error;
mod runner;

pub use error::ExecError;
pub use runner::{CommandOutput, CommandRunner, ExecOptions, ProcessRunner};
