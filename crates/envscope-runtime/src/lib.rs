//! Environment capability providers for envscope.
//!
//! Two implementations of [`envscope_core::ports::EnvironmentPort`]:
//!
//! - [`HostEnvironment`] probes the machine the process runs on
//! - [`SnapshotEnvironment`] replays values captured from a browser
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

pub mod host;
pub mod snapshot;

pub use host::{HostEnvironment, HostPaths, bucket_device_memory};
pub use snapshot::{SnapshotEnvironment, SnapshotError};
