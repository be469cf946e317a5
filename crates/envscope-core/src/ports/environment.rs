//! Environment capability provider port.
//!
//! Abstracts the ambient runtime (navigator/screen/window-like singletons)
//! behind typed accessors. Every accessor is best-effort: `None` means the
//! host does not expose that capability.
//!
//! # Design Notes
//!
//! - Core owns the trait and value types
//! - Runtime owns the implementations (native host probing, captured snapshots)
//! - CLI picks the provider in its composition root

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use thiserror::Error;

use crate::domain::{BatteryStatus, ConnectionInfo, ScreenMetrics};

/// Errors from asynchronous capability queries.
#[derive(Debug, Error)]
pub enum CapabilityError {
    /// The capability is not exposed by this host.
    #[error("Capability '{0}' is not available")]
    Unavailable(&'static str),

    /// The host exposes the capability but the query failed.
    #[error("Capability query '{capability}' failed: {message}")]
    QueryFailed {
        capability: &'static str,
        message: String,
    },
}

/// Result type for capability queries.
pub type CapabilityResult<T> = Result<T, CapabilityError>;

/// Vendor property names under which hosts expose network information,
/// in lookup order.
pub const CONNECTION_PROPERTIES: [&str; 3] = ["connection", "mozConnection", "webkitConnection"];

/// Port for reading the hosting runtime's environment.
#[async_trait]
pub trait EnvironmentPort: Send + Sync {
    /// Raw agent string.
    fn user_agent(&self) -> String;

    /// Current local timestamp.
    fn now(&self) -> DateTime<FixedOffset>;

    fn screen(&self) -> Option<ScreenMetrics>;

    /// Preferred locale tag, e.g. `ja-JP`.
    fn language(&self) -> Option<String>;

    /// Legacy locale property consulted when `language` is absent.
    fn user_language(&self) -> Option<String> {
        None
    }

    fn platform(&self) -> Option<String>;

    fn cookies_enabled(&self) -> bool;

    /// Approximate device memory in gigabytes.
    fn device_memory(&self) -> Option<f64>;

    /// Logical processor count.
    fn hardware_concurrency(&self) -> Option<u32>;

    /// Whether touch events are wired up on the host.
    fn has_touch_events(&self) -> bool;

    fn max_touch_points(&self) -> u32;

    /// Resolved IANA time zone name.
    fn time_zone(&self) -> Option<String>;

    /// Network information exposed under the given vendor property name.
    fn connection(&self, property: &str) -> Option<ConnectionInfo>;

    /// Whether the battery query capability exists at all.
    fn supports_battery(&self) -> bool;

    /// Query battery state. May take arbitrarily long; callers do not
    /// apply a timeout.
    async fn battery(&self) -> CapabilityResult<BatteryStatus>;

    /// Location of the host page, when there is one.
    fn page_url(&self) -> Option<String>;
}
