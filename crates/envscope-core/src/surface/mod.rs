//! Display surface implementations owned by core.

mod memory;

pub use memory::{MemorySurface, SlotState};
