//! Capability value types read from the hosting runtime.

use serde::{Deserialize, Serialize};

/// Screen geometry as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenMetrics {
    pub width: u32,
    pub height: u32,
    pub color_depth: u32,
}

/// Network information capability values.
///
/// Every field is independently optional; hosts expose whatever subset
/// they know about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    /// Physical link type, e.g. `wifi` or `ethernet`.
    #[serde(rename = "type")]
    pub connection_type: Option<String>,
    /// Effective quality class, e.g. `4g`.
    pub effective_type: Option<String>,
    /// Downlink estimate in megabits per second.
    pub downlink: Option<f64>,
    /// Round-trip time estimate in milliseconds.
    pub rtt: Option<f64>,
}

/// Resolved battery capability query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryStatus {
    pub charging: bool,
    /// Charge level as a fraction in `0.0..=1.0`.
    pub level: f64,
    /// Seconds until full; `f64::INFINITY` when unknown or discharging.
    pub charging_time: f64,
}

impl BatteryStatus {
    /// Charge level as a whole percentage, rounded down.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u32 {
        (self.level.clamp(0.0, 1.0) * 100.0).floor() as u32
    }

    /// Charging time estimate, only when it is a usable number of seconds.
    pub fn charging_seconds(&self) -> Option<f64> {
        (self.charging_time.is_finite() && self.charging_time > 0.0).then_some(self.charging_time)
    }
}
