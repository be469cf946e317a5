//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the reporter expects from its host. They
//! contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` types in any signature
//! - No filesystem or OS probing details
//! - Every capability accessor degrades to `None` rather than failing

pub mod environment;
pub mod geo_lookup;
pub mod surface;

pub use environment::{CONNECTION_PROPERTIES, CapabilityError, CapabilityResult, EnvironmentPort};
#[cfg(test)]
pub use geo_lookup::MockGeoLookupPort;
pub use geo_lookup::{GeoLookupError, GeoLookupPort, GeoLookupResult};
pub use surface::{DisplaySurface, WriteOutcome};
