//! Display slot identity and content types.
//!
//! A slot is a named location on the host display surface. The reporter
//! only ever overwrites slots the host has already declared.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stable identifier for every slot the reporter writes.
///
/// The string form (`as_str`) is the key the host surface uses, e.g.
/// `"ip-address"` or `"downlink-speed"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotKey {
    UserAgent,
    CurrentTime,
    ScreenResolution,
    Language,
    Platform,
    CookiesEnabled,
    DeviceMemory,
    CpuCores,
    TouchSupport,
    DeviceType,
    Timezone,
    BrowserBits,
    BrowserName,
    BrowserVersion,
    OperatingSystem,
    BatteryStatus,
    IpAddress,
    Country,
    Region,
    City,
    Postal,
    Isp,
    Location,
    ConnectionType,
    EffectiveConnectionType,
    DownlinkSpeed,
    Rtt,
    PageUrl,
}

impl SlotKey {
    /// Every slot key, in host page order.
    pub const ALL: [Self; 28] = [
        Self::UserAgent,
        Self::CurrentTime,
        Self::ScreenResolution,
        Self::Language,
        Self::Platform,
        Self::CookiesEnabled,
        Self::DeviceMemory,
        Self::CpuCores,
        Self::TouchSupport,
        Self::DeviceType,
        Self::Timezone,
        Self::BrowserBits,
        Self::BrowserName,
        Self::BrowserVersion,
        Self::OperatingSystem,
        Self::BatteryStatus,
        Self::IpAddress,
        Self::Country,
        Self::Region,
        Self::City,
        Self::Postal,
        Self::Isp,
        Self::Location,
        Self::ConnectionType,
        Self::EffectiveConnectionType,
        Self::DownlinkSpeed,
        Self::Rtt,
        Self::PageUrl,
    ];

    /// The four slots owned by the network quality probe.
    pub const NETWORK: [Self; 4] = [
        Self::ConnectionType,
        Self::EffectiveConnectionType,
        Self::DownlinkSpeed,
        Self::Rtt,
    ];

    /// Slots owned by the external location lookup.
    pub const LOCATION: [Self; 7] = [
        Self::IpAddress,
        Self::Country,
        Self::Region,
        Self::City,
        Self::Postal,
        Self::Isp,
        Self::Location,
    ];

    /// Host-facing string key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserAgent => "user-agent",
            Self::CurrentTime => "current-time",
            Self::ScreenResolution => "screen-resolution",
            Self::Language => "language",
            Self::Platform => "platform",
            Self::CookiesEnabled => "cookies-enabled",
            Self::DeviceMemory => "device-memory",
            Self::CpuCores => "cpu-cores",
            Self::TouchSupport => "touch-support",
            Self::DeviceType => "device-type",
            Self::Timezone => "timezone",
            Self::BrowserBits => "browser-bits",
            Self::BrowserName => "browser-name",
            Self::BrowserVersion => "browser-version",
            Self::OperatingSystem => "operating-system",
            Self::BatteryStatus => "battery-status",
            Self::IpAddress => "ip-address",
            Self::Country => "country",
            Self::Region => "region",
            Self::City => "city",
            Self::Postal => "postal",
            Self::Isp => "isp",
            Self::Location => "location",
            Self::ConnectionType => "connection-type",
            Self::EffectiveConnectionType => "effective-connection-type",
            Self::DownlinkSpeed => "downlink-speed",
            Self::Rtt => "rtt",
            Self::PageUrl => "page-url",
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown slot key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown slot key: {0}")]
pub struct UnknownSlotKey(pub String);

impl FromStr for SlotKey {
    type Err = UnknownSlotKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSlotKey(s.to_string()))
    }
}

/// Content held by a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SlotContent {
    /// Plain text, rendered escaped.
    Text(String),
    /// Pre-rendered markup, inserted as-is.
    Markup(String),
}

impl SlotContent {
    /// The raw string, regardless of kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Markup(s) => s,
        }
    }
}

/// Visual state attached to a slot write.
///
/// `Normal` on a slot that carries a marker (the IP address) renders as the
/// success style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    Normal,
    Error,
}

impl Presentation {
    /// Style class name used by markup renderers.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Normal => "success",
            Self::Error => "error",
        }
    }
}

/// A single write request funneled through the slot writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotUpdate {
    pub content: SlotContent,
    /// `None` leaves the slot's existing presentation untouched.
    pub presentation: Option<Presentation>,
}

impl SlotUpdate {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: SlotContent::Text(text.into()),
            presentation: None,
        }
    }

    pub fn markup(markup: impl Into<String>) -> Self {
        Self {
            content: SlotContent::Markup(markup.into()),
            presentation: None,
        }
    }

    #[must_use]
    pub const fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = Some(presentation);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_keys_round_trip_through_str() {
        for key in SlotKey::ALL {
            assert_eq!(key.as_str().parse::<SlotKey>(), Ok(key));
        }
    }

    #[test]
    fn test_unknown_slot_key() {
        let err = "gpu-model".parse::<SlotKey>().unwrap_err();
        assert!(err.to_string().contains("gpu-model"));
    }

    #[test]
    fn test_serde_uses_host_keys() {
        let json = serde_json::to_string(&SlotKey::EffectiveConnectionType).unwrap();
        assert_eq!(json, "\"effective-connection-type\"");
    }

    #[test]
    fn test_presentation_class_names() {
        assert_eq!(Presentation::Normal.class_name(), "success");
        assert_eq!(Presentation::Error.class_name(), "error");
    }

    #[test]
    fn test_update_builders() {
        let update = SlotUpdate::text("1.2.3.4").with_presentation(Presentation::Normal);
        assert_eq!(update.content, SlotContent::Text("1.2.3.4".to_string()));
        assert_eq!(update.presentation, Some(Presentation::Normal));
        assert!(SlotUpdate::markup("<a></a>").presentation.is_none());
    }
}
