//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PatternHubError`] via `#[from]`.

/// Top-level error returned by fallible domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum PatternHubError {
    /// A value failed a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A remote-control slot could not be addressed.
    #[error("slot error")]
    Slot(#[from] SlotError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("a remote control needs at least one slot")]
    NoSlots,
}

/// Errors addressing a slot on a remote control.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    #[error("slot {slot} is out of range (the remote has {slots} slots)")]
    OutOfRange { slot: usize, slots: usize },
}
