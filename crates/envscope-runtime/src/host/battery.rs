//! Battery state from `/sys/class/power_supply`.

use envscope_core::{BatteryStatus, CapabilityError, CapabilityResult};
use std::path::{Path, PathBuf};

const CAPABILITY: &str = "battery";

/// First power supply whose `type` is `Battery`.
pub fn find_battery(power_supply: &Path) -> Option<PathBuf> {
    let mut supplies: Vec<_> = std::fs::read_dir(power_supply)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .collect();
    supplies.sort();
    supplies.into_iter().find(|path| {
        std::fs::read_to_string(path.join("type")).is_ok_and(|t| t.trim() == "Battery")
    })
}

/// Read a battery directory into browser-shaped battery values.
///
/// `charging_time` follows the browser convention: 0 when full, infinity
/// when discharging or when the rate is unknown.
pub async fn read_battery(dir: &Path) -> CapabilityResult<BatteryStatus> {
    let status = read_attr(dir, "status").await?;
    let capacity: f64 = read_attr(dir, "capacity")
        .await?
        .parse()
        .map_err(|e| query_failed(format!("invalid capacity: {e}")))?;

    let charging = status == "Charging";
    let charging_time = if status == "Full" {
        0.0
    } else if charging {
        seconds_until_full(dir).await.unwrap_or(f64::INFINITY)
    } else {
        f64::INFINITY
    };

    Ok(BatteryStatus {
        charging,
        level: (capacity / 100.0).clamp(0.0, 1.0),
        charging_time,
    })
}

/// Remaining charge divided by the current charge rate. Drivers expose
/// either energy (µWh, µW) or charge (µAh, µA) counters.
async fn seconds_until_full(dir: &Path) -> Option<f64> {
    for (now, full, rate) in [
        ("energy_now", "energy_full", "power_now"),
        ("charge_now", "charge_full", "current_now"),
    ] {
        let (Some(now), Some(full), Some(rate)) = (
            read_number(dir, now).await,
            read_number(dir, full).await,
            read_number(dir, rate).await,
        ) else {
            continue;
        };
        if rate > 0.0 && full > now {
            return Some(((full - now) / rate * 3600.0).round());
        }
    }
    None
}

async fn read_attr(dir: &Path, name: &str) -> CapabilityResult<String> {
    tokio::fs::read_to_string(dir.join(name))
        .await
        .map(|s| s.trim().to_string())
        .map_err(|e| query_failed(format!("{name}: {e}")))
}

async fn read_number(dir: &Path, name: &str) -> Option<f64> {
    read_attr(dir, name).await.ok()?.parse().ok()
}

fn query_failed(message: String) -> CapabilityError {
    CapabilityError::QueryFailed {
        capability: CAPABILITY,
        message,
    }
}
