//! Slots command handler.
//!
//! Lists every slot key the reporter writes, with the probe that owns it.

use envscope_core::SlotKey;

/// Probe that owns a slot. Each slot has exactly one owner.
pub const fn owner(key: SlotKey) -> &'static str {
    match key {
        SlotKey::BrowserName | SlotKey::BrowserVersion | SlotKey::OperatingSystem => "browser",
        SlotKey::BatteryStatus => "battery",
        SlotKey::IpAddress
        | SlotKey::Country
        | SlotKey::Region
        | SlotKey::City
        | SlotKey::Postal
        | SlotKey::Isp
        | SlotKey::Location => "location",
        SlotKey::ConnectionType
        | SlotKey::EffectiveConnectionType
        | SlotKey::DownlinkSpeed
        | SlotKey::Rtt => "network",
        SlotKey::PageUrl => "page",
        _ => "basic",
    }
}

/// Execute the slots command.
pub fn execute() {
    println!("{:<27} Probe", "Slot");
    println!("{}", "-".repeat(36));
    for key in SlotKey::ALL {
        println!("{:<27} {}", key.as_str(), owner(key));
    }
}
