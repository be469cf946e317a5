//! Native host environment provider.
//!
//! `HostEnvironment` implements `EnvironmentPort` for a native process by
//! probing the OS: sysfs for network and battery, POSIX locale variables,
//! the time zone database links, and `sysinfo` for memory.

mod agent;
mod battery;
mod locale;
mod memory;
mod network;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Local};
use envscope_core::ports::{CapabilityError, CapabilityResult, EnvironmentPort};
use envscope_core::{BatteryStatus, ConnectionInfo, ScreenMetrics};
use std::path::PathBuf;

pub use memory::bucket_device_memory;

/// Filesystem locations probed by `HostEnvironment`.
#[derive(Debug, Clone)]
pub struct HostPaths {
    pub sys_class_net: PathBuf,
    pub power_supply: PathBuf,
    pub etc_timezone: PathBuf,
    pub etc_localtime: PathBuf,
}

impl Default for HostPaths {
    fn default() -> Self {
        Self {
            sys_class_net: PathBuf::from("/sys/class/net"),
            power_supply: PathBuf::from("/sys/class/power_supply"),
            etc_timezone: PathBuf::from("/etc/timezone"),
            etc_localtime: PathBuf::from("/etc/localtime"),
        }
    }
}

/// Environment of the running process.
///
/// A native process has no screen, cookies, touch input or page URL; those
/// capabilities report as absent.
///
/// # Example
///
/// ```ignore
/// use envscope_runtime::HostEnvironment;
/// use envscope_core::ports::EnvironmentPort;
///
/// let env = HostEnvironment::new();
/// println!("{}", env.user_agent());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HostEnvironment {
    paths: HostPaths,
}

impl HostEnvironment {
    /// Create a provider probing the standard system locations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider probing custom locations.
    pub const fn with_paths(paths: HostPaths) -> Self {
        Self { paths }
    }
}

#[async_trait]
impl EnvironmentPort for HostEnvironment {
    fn user_agent(&self) -> String {
        agent::user_agent(
            std::env::consts::OS,
            std::env::consts::ARCH,
            env!("CARGO_PKG_VERSION"),
        )
    }

    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn screen(&self) -> Option<ScreenMetrics> {
        None
    }

    fn language(&self) -> Option<String> {
        locale::language_from(|key| std::env::var(key).ok())
    }

    fn platform(&self) -> Option<String> {
        Some(agent::platform(
            std::env::consts::OS,
            std::env::consts::ARCH,
        ))
    }

    fn cookies_enabled(&self) -> bool {
        false
    }

    fn device_memory(&self) -> Option<f64> {
        memory::device_memory()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn hardware_concurrency(&self) -> Option<u32> {
        Some(num_cpus::get() as u32)
    }

    fn has_touch_events(&self) -> bool {
        false
    }

    fn max_touch_points(&self) -> u32 {
        0
    }

    fn time_zone(&self) -> Option<String> {
        locale::time_zone_from(
            std::env::var("TZ").ok(),
            &self.paths.etc_timezone,
            &self.paths.etc_localtime,
        )
    }

    fn connection(&self, property: &str) -> Option<ConnectionInfo> {
        if property != "connection" {
            return None;
        }
        network::active_connection(&self.paths.sys_class_net)
    }

    fn supports_battery(&self) -> bool {
        battery::find_battery(&self.paths.power_supply).is_some()
    }

    async fn battery(&self) -> CapabilityResult<BatteryStatus> {
        let dir = battery::find_battery(&self.paths.power_supply)
            .ok_or(CapabilityError::Unavailable("battery"))?;
        battery::read_battery(&dir).await
    }

    fn page_url(&self) -> Option<String> {
        None
    }
}
