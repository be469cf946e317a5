//! Display surface port.
//!
//! The host owns the slots; the reporter only replaces content of slots the
//! host has already declared.

use crate::domain::{SlotKey, SlotUpdate};

/// Result of a single slot write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The surface has no such slot; nothing changed.
    Skipped,
}

/// Port for the host display surface.
///
/// # Implementations
///
/// - `MemorySurface` - in-process surface used by the CLI and tests
/// - Adapter-specific surfaces (DOM bindings, templated pages, etc.)
pub trait DisplaySurface: Send + Sync {
    /// Replace the slot's content.
    ///
    /// Must return `WriteOutcome::Skipped` without side effects when the slot
    /// does not exist. A `None` presentation leaves the slot's current
    /// presentation in place.
    fn replace(&self, key: SlotKey, update: SlotUpdate) -> WriteOutcome;
}
