// ABOUTME: Readiness reporting for setup-gated wrappers.
// ABOUTME: State markers implement Lifecycle so callers can ask whether setup has completed.

pub(crate) mod sealed {
    /// Keeps lifecycle states defined inside this crate.
    pub trait Sealed {}
}

/// A lifecycle state of a setup-gated wrapper.
///
/// Gated operations are only implemented for the ready state type, so a
/// wrapper that has not completed `setup` cannot call them at all. `READY`
/// exposes the same fact as a value.
pub trait Lifecycle: sealed::Sealed {
    /// Whether `setup` has completed for this state.
    const READY: bool;
}
