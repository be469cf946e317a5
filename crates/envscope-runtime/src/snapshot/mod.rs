//! Environment captured from a browser.
//!
//! A snapshot is a JSON document holding the navigator, screen, connection
//! and battery values a page can read. Loading one lets the reporter render
//! exactly what that browser would have shown.
//!
//! ```json
//! {
//!   "userAgent": "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ... Chrome/124.0.0.0 Safari/537.36",
//!   "language": "ja-JP",
//!   "platform": "Win32",
//!   "cookieEnabled": true,
//!   "deviceMemory": 8,
//!   "hardwareConcurrency": 12,
//!   "maxTouchPoints": 0,
//!   "timeZone": "Asia/Tokyo",
//!   "screen": { "width": 1920, "height": 1080, "colorDepth": 24 },
//!   "connection": { "effectiveType": "4g", "downlink": 10, "rtt": 50 },
//!   "battery": { "charging": true, "level": 0.8, "chargingTime": 1800 },
//!   "href": "https://example.com/env"
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Local};
use envscope_core::ports::{CapabilityError, CapabilityResult, EnvironmentPort};
use envscope_core::{BatteryStatus, ConnectionInfo, ScreenMetrics};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors loading a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Battery values as captured; JSON cannot carry `Infinity`, so an unknown
/// charging time arrives as `null` or is omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CapturedBattery {
    charging: bool,
    level: f64,
    #[serde(default)]
    charging_time: Option<f64>,
}

/// Deserialized snapshot document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEnvironment {
    user_agent: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    user_language: Option<String>,
    #[serde(default)]
    platform: Option<String>,
    #[serde(default)]
    cookie_enabled: bool,
    #[serde(default)]
    device_memory: Option<f64>,
    #[serde(default)]
    hardware_concurrency: Option<u32>,
    #[serde(default)]
    max_touch_points: u32,
    #[serde(default)]
    touch_events: bool,
    #[serde(default)]
    time_zone: Option<String>,
    #[serde(default)]
    screen: Option<ScreenMetrics>,
    #[serde(default)]
    connection: Option<ConnectionInfo>,
    /// Vendor property the connection was read from.
    #[serde(default = "default_connection_property")]
    connection_property: String,
    #[serde(default)]
    battery: Option<CapturedBattery>,
    #[serde(default)]
    href: Option<String>,
}

fn default_connection_property() -> String {
    "connection".to_string()
}

impl SnapshotEnvironment {
    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot file.
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[async_trait]
impl EnvironmentPort for SnapshotEnvironment {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    /// Reports are rendered at load time, not capture time.
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn screen(&self) -> Option<ScreenMetrics> {
        self.screen
    }

    fn language(&self) -> Option<String> {
        self.language.clone()
    }

    fn user_language(&self) -> Option<String> {
        self.user_language.clone()
    }

    fn platform(&self) -> Option<String> {
        self.platform.clone()
    }

    fn cookies_enabled(&self) -> bool {
        self.cookie_enabled
    }

    fn device_memory(&self) -> Option<f64> {
        self.device_memory
    }

    fn hardware_concurrency(&self) -> Option<u32> {
        self.hardware_concurrency
    }

    fn has_touch_events(&self) -> bool {
        self.touch_events
    }

    fn max_touch_points(&self) -> u32 {
        self.max_touch_points
    }

    fn time_zone(&self) -> Option<String> {
        self.time_zone.clone()
    }

    fn connection(&self, property: &str) -> Option<ConnectionInfo> {
        if property == self.connection_property {
            self.connection.clone()
        } else {
            None
        }
    }

    fn supports_battery(&self) -> bool {
        self.battery.is_some()
    }

    async fn battery(&self) -> CapabilityResult<BatteryStatus> {
        let captured = self
            .battery
            .as_ref()
            .ok_or(CapabilityError::Unavailable("battery"))?;
        Ok(BatteryStatus {
            charging: captured.charging,
            level: captured.level,
            charging_time: captured.charging_time.unwrap_or(f64::INFINITY),
        })
    }

    fn page_url(&self) -> Option<String> {
        self.href.clone()
    }
}
