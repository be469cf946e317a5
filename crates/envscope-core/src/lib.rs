//! Core of envscope: domain types, ports and the environment reporter.
//!
//! The reporter reads the hosting runtime through [`ports::EnvironmentPort`],
//! performs one IP geolocation lookup through [`ports::GeoLookupPort`], and
//! writes every result into a named slot of a [`ports::DisplaySurface`].
#![deny(unused_crate_dependencies)]

pub mod classify;
pub mod domain;
pub mod format;
pub mod labels;
pub mod ports;
pub mod services;
pub mod surface;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use domain::{
    BatteryStatus, ConnectionInfo, Coordinates, GeoRecord, Presentation, ScreenMetrics,
    SlotContent, SlotKey, SlotUpdate, UnknownSlotKey,
};
pub use ports::{
    CapabilityError, CapabilityResult, DisplaySurface, EnvironmentPort, GeoLookupError,
    GeoLookupPort, GeoLookupResult, WriteOutcome,
};
pub use services::{EnvironmentReporter, ReportSummary, SlotWriter};
pub use surface::{MemorySurface, SlotState};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
