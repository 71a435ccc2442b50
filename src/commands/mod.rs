// ABOUTME: Command module aggregator for the launchpad CLI.
// ABOUTME: Re-exports deploy, init, and env command handlers.

mod deploy;
mod env;
mod init;

pub use deploy::deploy;
pub use env::print_env;
pub use init::init;
