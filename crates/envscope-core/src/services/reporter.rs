//! The environment reporter: five independent probes writing into disjoint
//! slots.

use std::sync::Arc;

use crate::classify::{classify_device, detect_architecture, identify_browser, identify_os};
use crate::domain::{GeoRecord, Presentation, SlotKey};
use crate::format;
use crate::labels;
use crate::ports::{CONNECTION_PROPERTIES, DisplaySurface, EnvironmentPort, GeoLookupPort};
use crate::services::SlotWriter;

/// Outcome counters for one reporter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportSummary {
    /// Slot writes that landed on a declared slot.
    pub written: usize,
    /// Slot writes dropped because the slot was not declared.
    pub skipped: usize,
}

/// Reads the environment through its ports and renders it onto the surface.
///
/// Each probe is callable on its own; `run` dispatches all of them. No probe
/// reads another probe's output and no two probes share a slot.
pub struct EnvironmentReporter {
    env: Arc<dyn EnvironmentPort>,
    lookup: Arc<dyn GeoLookupPort>,
    slots: SlotWriter,
}

impl EnvironmentReporter {
    pub fn new(
        env: Arc<dyn EnvironmentPort>,
        lookup: Arc<dyn GeoLookupPort>,
        surface: Arc<dyn DisplaySurface>,
    ) -> Self {
        Self {
            env,
            lookup,
            slots: SlotWriter::new(surface),
        }
    }

    /// Run every probe once.
    ///
    /// The synchronous probes complete inline; the battery query and the
    /// location lookup are awaited concurrently. Never fails.
    pub async fn run(&self) -> ReportSummary {
        tracing::info!("Collecting environment report");

        self.probe_basic();
        self.identify_browser();
        self.probe_network();
        self.write_page_url();

        tokio::join!(self.probe_battery(), self.lookup_location());

        let summary = self.summary();
        tracing::info!(
            written = summary.written,
            skipped = summary.skipped,
            "Environment report complete"
        );
        summary
    }

    /// Counters accumulated so far.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            written: self.slots.written(),
            skipped: self.slots.skipped(),
        }
    }

    /// Agent, time, screen, locale, platform, cookies, memory, cores, touch,
    /// device class, timezone and architecture bits.
    pub fn probe_basic(&self) {
        let agent = self.env.user_agent();

        self.slots.text(SlotKey::UserAgent, agent.as_str());
        self.slots
            .text(SlotKey::CurrentTime, format::timestamp(&self.env.now()));
        self.slots.text(
            SlotKey::ScreenResolution,
            self.env
                .screen()
                .map_or_else(|| labels::NO_INFORMATION.to_string(), |s| format::screen(&s)),
        );
        self.slots.text(
            SlotKey::Language,
            self.env
                .language()
                .or_else(|| self.env.user_language())
                .unwrap_or_else(|| labels::NO_INFORMATION.to_string()),
        );
        self.slots.text(
            SlotKey::Platform,
            self.env
                .platform()
                .unwrap_or_else(|| labels::NO_INFORMATION.to_string()),
        );
        self.slots.text(
            SlotKey::CookiesEnabled,
            if self.env.cookies_enabled() {
                labels::COOKIES_ENABLED
            } else {
                labels::COOKIES_DISABLED
            },
        );

        self.slots.text(
            SlotKey::DeviceMemory,
            self.env.device_memory().map_or_else(
                || labels::NO_INFORMATION.to_string(),
                |gb| format!("{} GB", format::display_number(gb)),
            ),
        );
        self.slots.text(
            SlotKey::CpuCores,
            self.env
                .hardware_concurrency()
                .map_or_else(|| labels::NO_INFORMATION.to_string(), |n| n.to_string()),
        );

        let touch = self.env.has_touch_events() || self.env.max_touch_points() > 0;
        self.slots.text(
            SlotKey::TouchSupport,
            if touch {
                labels::TOUCH_SUPPORTED
            } else {
                labels::TOUCH_UNSUPPORTED
            },
        );

        self.slots.text(
            SlotKey::DeviceType,
            labels::device_class(classify_device(&agent)),
        );
        self.slots.text(
            SlotKey::Timezone,
            self.env
                .time_zone()
                .filter(|tz| !tz.is_empty())
                .unwrap_or_else(|| labels::TIMEZONE_UNAVAILABLE.to_string()),
        );
        self.slots.text(
            SlotKey::BrowserBits,
            labels::architecture(detect_architecture(&agent)),
        );
    }

    /// Browser name, browser version and operating system.
    pub fn identify_browser(&self) {
        let agent = self.env.user_agent();

        let (name, version) = identify_browser(&agent).map_or_else(
            || (labels::UNKNOWN_BROWSER, labels::UNKNOWN.to_string()),
            |m| (m.name, m.version),
        );
        let os = identify_os(&agent).map_or(labels::UNKNOWN_OS, |os| os.name());

        tracing::debug!(browser = name, %version, os, "Identified agent");

        self.slots.text(SlotKey::BrowserName, name);
        self.slots.text(SlotKey::BrowserVersion, version);
        self.slots.text(SlotKey::OperatingSystem, os);
    }

    /// Battery state. Writes nothing if the query is rejected or never
    /// completes.
    pub async fn probe_battery(&self) {
        if !self.env.supports_battery() {
            self.slots
                .text(SlotKey::BatteryStatus, labels::BATTERY_UNAVAILABLE);
            return;
        }

        match self.env.battery().await {
            Ok(status) => self
                .slots
                .text(SlotKey::BatteryStatus, format::battery(&status)),
            Err(e) => {
                tracing::debug!(error = %e, "Battery query rejected, leaving slot untouched");
            }
        }
    }

    /// One geolocation lookup. On failure only the IP slot changes.
    pub async fn lookup_location(&self) {
        match self.lookup.lookup().await {
            Ok(record) => self.write_location(&record),
            Err(e) => {
                tracing::error!(error = %e, "IP geolocation lookup failed");
                self.slots
                    .styled(SlotKey::IpAddress, labels::LOOKUP_FAILED, Presentation::Error);
            }
        }
    }

    fn write_location(&self, record: &GeoRecord) {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();

        self.slots
            .styled(SlotKey::IpAddress, record.ip.as_str(), Presentation::Normal);
        self.slots.text(
            SlotKey::Country,
            format!(
                "{} ({})",
                field(&record.country),
                field(&record.country_name)
            ),
        );
        self.slots.text(SlotKey::Region, field(&record.region));
        self.slots.text(SlotKey::City, field(&record.city));
        self.slots.text(SlotKey::Postal, field(&record.postal));
        self.slots.text(SlotKey::Isp, field(&record.org));

        match record.coordinates() {
            Some(coords) => self
                .slots
                .markup(SlotKey::Location, format::map_link(&coords)),
            None if record.loc.is_some() => {
                tracing::warn!(loc = ?record.loc, "Location is not a lat,lon pair, skipping map link");
            }
            None => {}
        }
    }

    /// Connection type, effective type, downlink and round-trip time.
    pub fn probe_network(&self) {
        let connection = CONNECTION_PROPERTIES
            .iter()
            .find_map(|property| self.env.connection(property));

        let Some(conn) = connection else {
            tracing::debug!("Network information capability not exposed");
            for key in SlotKey::NETWORK {
                self.slots.text(key, labels::NO_INFORMATION);
            }
            return;
        };

        let or_placeholder = |value: Option<String>| {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| labels::NO_INFORMATION.to_string())
        };

        self.slots
            .text(SlotKey::ConnectionType, or_placeholder(conn.connection_type));
        self.slots.text(
            SlotKey::EffectiveConnectionType,
            or_placeholder(conn.effective_type),
        );
        self.slots
            .text(SlotKey::DownlinkSpeed, format::measurement(conn.downlink, "Mbps"));
        self.slots
            .text(SlotKey::Rtt, format::measurement(conn.rtt, "ms"));
    }

    /// Location of the host page.
    pub fn write_page_url(&self) {
        self.slots.text(
            SlotKey::PageUrl,
            self.env
                .page_url()
                .unwrap_or_else(|| labels::NO_INFORMATION.to_string()),
        );
    }
}
