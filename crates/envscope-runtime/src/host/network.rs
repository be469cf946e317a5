//! Network information from `/sys/class/net`.

use envscope_core::ConnectionInfo;
use std::fs;
use std::path::Path;

/// Describe the first interface that is up, skipping loopback.
///
/// Only the link type and, for wired links, the negotiated speed are known
/// natively; effective type and round-trip time stay unset.
#[allow(clippy::cast_precision_loss)]
pub fn active_connection(sys_class_net: &Path) -> Option<ConnectionInfo> {
    let mut interfaces: Vec<_> = fs::read_dir(sys_class_net)
        .ok()?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.file_name().is_some_and(|name| name != "lo"))
        .collect();
    interfaces.sort();

    let iface = interfaces.into_iter().find(|path| {
        read_trimmed(&path.join("operstate")).is_some_and(|state| state == "up")
    })?;

    let wireless = iface.join("wireless").exists() || iface.join("phy80211").exists();
    // Wireless drivers report -1 or nothing for speed.
    let downlink = read_trimmed(&iface.join("speed"))
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|mbps| *mbps > 0);

    tracing::debug!(interface = ?iface.file_name(), wireless, "Active network interface");

    Some(ConnectionInfo {
        connection_type: Some(if wireless { "wifi" } else { "ethernet" }.to_string()),
        effective_type: None,
        downlink: downlink.map(|mbps| mbps as f64),
        rtt: None,
    })
}

fn read_trimmed(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn iface(root: &Path, name: &str, state: &str, speed: Option<&str>) -> PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("operstate"), format!("{state}\n")).unwrap();
        if let Some(speed) = speed {
            fs::write(dir.join("speed"), format!("{speed}\n")).unwrap();
        }
        dir
    }

    #[test]
    fn test_wired_interface() {
        let root = tempfile::tempdir().unwrap();
        iface(root.path(), "lo", "unknown", None);
        iface(root.path(), "eth0", "up", Some("1000"));

        let info = active_connection(root.path()).unwrap();
        assert_eq!(info.connection_type.as_deref(), Some("ethernet"));
        assert_eq!(info.downlink, Some(1000.0));
        assert!(info.effective_type.is_none());
        assert!(info.rtt.is_none());
    }

    #[test]
    fn test_wireless_interface_skips_down_links() {
        let root = tempfile::tempdir().unwrap();
        iface(root.path(), "eth0", "down", Some("1000"));
        let wlan = iface(root.path(), "wlan0", "up", Some("-1"));
        fs::create_dir_all(wlan.join("wireless")).unwrap();

        let info = active_connection(root.path()).unwrap();
        assert_eq!(info.connection_type.as_deref(), Some("wifi"));
        assert!(info.downlink.is_none());
    }

    #[test]
    fn test_no_active_interface() {
        let root = tempfile::tempdir().unwrap();
        iface(root.path(), "eth0", "down", None);
        assert!(active_connection(root.path()).is_none());
        assert!(active_connection(&root.path().join("missing")).is_none());
    }
}
