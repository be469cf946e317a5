//! Domain types shared by the reporter, its ports and the host adapters.

mod environment;
mod location;
mod slot;

pub use environment::{BatteryStatus, ConnectionInfo, ScreenMetrics};
pub use location::{Coordinates, GeoRecord};
pub use slot::{Presentation, SlotContent, SlotKey, SlotUpdate, UnknownSlotKey};
