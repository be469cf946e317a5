//! Test doubles for the environment port.
//!
//! Available to this crate's tests and, via the `test-utils` feature, to
//! downstream crates.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, TimeZone};
use std::collections::HashMap;

use crate::domain::{BatteryStatus, ConnectionInfo, ScreenMetrics};
use crate::ports::{CapabilityError, CapabilityResult, EnvironmentPort};

/// How the fake answers a battery query.
#[derive(Debug, Clone)]
pub enum FakeBattery {
    /// Capability absent.
    Unsupported,
    Resolves(BatteryStatus),
    Rejects(String),
    /// The query never completes.
    Hangs,
}

/// Configurable in-memory environment.
#[derive(Debug, Clone)]
pub struct FakeEnvironment {
    pub user_agent: String,
    pub now: DateTime<FixedOffset>,
    pub screen: Option<ScreenMetrics>,
    pub language: Option<String>,
    pub user_language: Option<String>,
    pub platform: Option<String>,
    pub cookies_enabled: bool,
    pub device_memory: Option<f64>,
    pub hardware_concurrency: Option<u32>,
    pub touch_events: bool,
    pub max_touch_points: u32,
    pub time_zone: Option<String>,
    pub connections: HashMap<String, ConnectionInfo>,
    pub battery: FakeBattery,
    pub page_url: Option<String>,
}

impl FakeEnvironment {
    /// A desktop Chrome on Windows with every capability present except
    /// network information and battery.
    pub fn desktop_chrome() -> Self {
        let tz = FixedOffset::east_opt(9 * 3600).expect("valid offset");
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36"
                .to_string(),
            now: tz
                .with_ymd_and_hms(2024, 4, 5, 9, 3, 7)
                .single()
                .expect("valid timestamp"),
            screen: Some(ScreenMetrics {
                width: 1920,
                height: 1080,
                color_depth: 24,
            }),
            language: Some("ja-JP".to_string()),
            user_language: None,
            platform: Some("Win32".to_string()),
            cookies_enabled: true,
            device_memory: Some(8.0),
            hardware_concurrency: Some(12),
            touch_events: false,
            max_touch_points: 0,
            time_zone: Some("Asia/Tokyo".to_string()),
            connections: HashMap::new(),
            battery: FakeBattery::Unsupported,
            page_url: Some("https://example.test/env".to_string()),
        }
    }

    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    #[must_use]
    pub fn with_connection(mut self, property: &str, info: ConnectionInfo) -> Self {
        self.connections.insert(property.to_string(), info);
        self
    }

    #[must_use]
    pub fn with_battery(mut self, battery: FakeBattery) -> Self {
        self.battery = battery;
        self
    }
}

#[async_trait]
impl EnvironmentPort for FakeEnvironment {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn now(&self) -> DateTime<FixedOffset> {
        self.now
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
        self.cookies_enabled
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
        self.connections.get(property).cloned()
    }

    fn supports_battery(&self) -> bool {
        !matches!(self.battery, FakeBattery::Unsupported)
    }

    async fn battery(&self) -> CapabilityResult<BatteryStatus> {
        match &self.battery {
            FakeBattery::Unsupported => Err(CapabilityError::Unavailable("battery")),
            FakeBattery::Resolves(status) => Ok(*status),
            FakeBattery::Rejects(message) => Err(CapabilityError::QueryFailed {
                capability: "battery",
                message: message.clone(),
            }),
            FakeBattery::Hangs => std::future::pending().await,
        }
    }

    fn page_url(&self) -> Option<String> {
        self.page_url.clone()
    }
}
