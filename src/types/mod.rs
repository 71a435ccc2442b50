// ABOUTME: Validated domain types shared across launchpad.
// ABOUTME: Image-safe application names and redacted secrets.

mod app_name;
mod secret;

pub use app_name::{AppName, AppNameError};
pub use secret::Secret;
