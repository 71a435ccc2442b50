// ABOUTME: Deployment client state markers for the type state pattern.
// ABOUTME: The Ready state carries the organization resolved during setup.

use crate::lifecycle::{Lifecycle, sealed::Sealed};

use super::types::Organization;

/// Constructed, organization not yet resolved.
/// Available actions: `setup()`
#[derive(Debug, Clone, Copy, Default)]
pub struct Uninitialized;

/// Organization resolved.
/// Available actions: `create_deployment()`
#[derive(Debug, Clone)]
pub struct Ready {
    organization: Organization,
}

impl Ready {
    pub(crate) fn new(organization: Organization) -> Self {
        Self { organization }
    }

    pub fn organization(&self) -> &Organization {
        &self.organization
    }
}

impl Sealed for Uninitialized {}
impl Sealed for Ready {}

impl Lifecycle for Uninitialized {
    const READY: bool = false;
}

impl Lifecycle for Ready {
    const READY: bool = true;
}
