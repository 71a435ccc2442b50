// ABOUTME: Image builder state markers for the type state pattern.
// ABOUTME: Zero-sized types keep build_and_push unavailable until setup succeeds.

use crate::lifecycle::{Lifecycle, sealed::Sealed};

/// Constructed, not yet probed or logged in.
/// Available actions: `setup()`, `login()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Uninitialized;

/// Build capability confirmed and registry login done.
/// Available actions: `build_and_push()`, `login()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Ready;

impl Sealed for Uninitialized {}
impl Sealed for Ready {}

impl Lifecycle for Uninitialized {
    const READY: bool = false;
}

impl Lifecycle for Ready {
    const READY: bool = true;
}
