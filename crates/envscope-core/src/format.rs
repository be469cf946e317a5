//! Formatting helpers shared by the probes.

use chrono::{DateTime, FixedOffset};

use crate::domain::{BatteryStatus, Coordinates, ScreenMetrics};
use crate::labels;

const MAP_BASE_URL: &str = "https://maps.google.com/?q=";

/// Render a number the way a script runtime prints it: whole values without
/// a fractional part, everything else with the shortest exact form.
pub fn display_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// `2024/4/5 9:03:07`
pub fn timestamp(now: &DateTime<FixedOffset>) -> String {
    now.format("%Y/%-m/%-d %-H:%M:%S").to_string()
}

/// `1920 × 1080 (24bit)`
pub fn screen(metrics: &ScreenMetrics) -> String {
    format!(
        "{} × {} ({}bit)",
        metrics.width, metrics.height, metrics.color_depth
    )
}

/// `充電中: はい, 残量: 85%, 充電時間: 1200秒`
pub fn battery(status: &BatteryStatus) -> String {
    let charging = if status.charging {
        labels::YES
    } else {
        labels::NO
    };
    let charging_time = status
        .charging_seconds()
        .map_or_else(|| labels::UNKNOWN.to_string(), |s| format!("{}秒", display_number(s)));
    format!(
        "充電中: {charging}, 残量: {}%, 充電時間: {charging_time}",
        status.percent()
    )
}

/// `{value} {unit}` when the value is present and non-zero, else the
/// no-information placeholder.
pub fn measurement(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => format!("{} {unit}", display_number(v)),
        _ => labels::NO_INFORMATION.to_string(),
    }
}

/// Map link markup for a coordinate pair. Coordinate text is escaped but
/// otherwise kept literally.
pub fn map_link(coords: &Coordinates) -> String {
    let lat = escape_markup(&coords.lat);
    let lon = escape_markup(&coords.lon);
    format!(
        r#"<a href="{MAP_BASE_URL}{lat},{lon}" target="_blank">緯度: {lat}, 経度: {lon}</a>"#
    )
}

/// Escape text for inclusion in markup content or a quoted attribute.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_number() {
        assert_eq!(display_number(8.0), "8");
        assert_eq!(display_number(0.5), "0.5");
        assert_eq!(display_number(1.45), "1.45");
        assert_eq!(display_number(3600.0), "3600");
    }

    #[test]
    fn test_timestamp_without_padding() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 4, 5, 9, 3, 7).unwrap();
        assert_eq!(timestamp(&now), "2024/4/5 9:03:07");
    }

    #[test]
    fn test_screen() {
        let metrics = ScreenMetrics {
            width: 2560,
            height: 1440,
            color_depth: 30,
        };
        assert_eq!(screen(&metrics), "2560 × 1440 (30bit)");
    }

    #[test]
    fn test_battery_charging() {
        let status = BatteryStatus {
            charging: true,
            level: 0.857,
            charging_time: 1200.0,
        };
        assert_eq!(battery(&status), "充電中: はい, 残量: 85%, 充電時間: 1200秒");
    }

    #[test]
    fn test_battery_discharging() {
        let status = BatteryStatus {
            charging: false,
            level: 0.42,
            charging_time: f64::INFINITY,
        };
        assert_eq!(battery(&status), "充電中: いいえ, 残量: 42%, 充電時間: 不明");
    }

    #[test]
    fn test_measurement() {
        assert_eq!(measurement(Some(10.0), "Mbps"), "10 Mbps");
        assert_eq!(measurement(Some(1.45), "Mbps"), "1.45 Mbps");
        assert_eq!(measurement(Some(0.0), "ms"), labels::NO_INFORMATION);
        assert_eq!(measurement(None, "ms"), labels::NO_INFORMATION);
    }

    #[test]
    fn test_map_link() {
        let coords = Coordinates {
            lat: "10.0".to_string(),
            lon: "20.0".to_string(),
        };
        assert_eq!(
            map_link(&coords),
            r#"<a href="https://maps.google.com/?q=10.0,20.0" target="_blank">緯度: 10.0, 経度: 20.0</a>"#
        );
    }

    #[test]
    fn test_map_link_escapes_coordinates() {
        let coords = Coordinates {
            lat: "1\"><script>".to_string(),
            lon: "2".to_string(),
        };
        let link = map_link(&coords);
        assert!(!link.contains("<script>"));
        assert!(link.contains("&quot;&gt;&lt;script&gt;"));
    }
}
