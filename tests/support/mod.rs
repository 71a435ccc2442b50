// ABOUTME: Test support utilities.
// ABOUTME: Provides scripted collaborators and shared fixtures for integration tests.

// Each test binary only uses some of these modules, so allow dead_code.
#[allow(dead_code)]
pub mod fake_runner;
#[allow(dead_code)]
pub mod fake_transport;

use launchpad::context::InvocationContext;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter =
            EnvFilter::from_default_env().add_directive("launchpad=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Context for a push of `main` in `acme/widgets`.
#[allow(dead_code)]
pub fn test_context() -> InvocationContext {
    InvocationContext::new("abc123", "widgets", "main")
}
