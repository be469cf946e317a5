//! Reporter runs against captured browser snapshots.

use std::sync::Arc;

use async_trait::async_trait;
use envscope_core::{
    EnvironmentReporter, GeoLookupPort, GeoLookupResult, GeoRecord, MemorySurface, SlotContent,
    SlotKey,
};
use envscope_runtime::SnapshotEnvironment;

const PENDING: &str = "取得中...";

const IPAD_SNAPSHOT: &str = r#"{
    "userAgent": "Mozilla/5.0 (iPad; CPU OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1",
    "language": "ja",
    "platform": "iPad",
    "cookieEnabled": true,
    "maxTouchPoints": 5,
    "timeZone": "Asia/Tokyo",
    "screen": { "width": 820, "height": 1180, "colorDepth": 24 },
    "battery": { "charging": true, "level": 0.42, "chargingTime": 2700 },
    "href": "https://example.com/env?from=ipad"
}"#;

struct FixedLookup(GeoRecord);

#[async_trait]
impl GeoLookupPort for FixedLookup {
    async fn lookup(&self) -> GeoLookupResult<GeoRecord> {
        Ok(self.0.clone())
    }
}

fn tokyo_record() -> GeoRecord {
    GeoRecord {
        country: Some("JP".to_string()),
        country_name: Some("Japan".to_string()),
        region: Some("Tokyo".to_string()),
        city: Some("Chiyoda".to_string()),
        postal: Some("100-0001".to_string()),
        org: Some("AS2516 KDDI CORPORATION".to_string()),
        loc: Some("35.6940,139.7536".to_string()),
        ..GeoRecord::new("203.0.113.7")
    }
}

async fn report(snapshot: &str) -> Arc<MemorySurface> {
    let env = SnapshotEnvironment::from_json(snapshot).unwrap();
    let surface = Arc::new(MemorySurface::with_all_slots(PENDING));
    let reporter = EnvironmentReporter::new(
        Arc::new(env),
        Arc::new(FixedLookup(tokyo_record())),
        surface.clone(),
    );
    let summary = reporter.run().await;
    assert_eq!(summary.skipped, 0);
    surface
}

#[tokio::test]
async fn test_ipad_snapshot() {
    let surface = report(IPAD_SNAPSHOT).await;
    let text = |key| surface.text(key).unwrap();

    // "Mobile/" in the agent wins over "iPad".
    assert_eq!(text(SlotKey::DeviceType), "モバイル");
    assert_eq!(text(SlotKey::TouchSupport), "サポートあり");
    assert_eq!(text(SlotKey::ScreenResolution), "820 × 1180 (24bit)");
    assert_eq!(text(SlotKey::BrowserName), "Safari");
    assert_eq!(text(SlotKey::BrowserVersion), "17");
    assert_eq!(text(SlotKey::OperatingSystem), "macOS");
    assert_eq!(text(SlotKey::DeviceMemory), "情報なし");
    assert_eq!(text(SlotKey::ConnectionType), "情報なし");
    assert_eq!(
        text(SlotKey::BatteryStatus),
        "充電中: はい, 残量: 42%, 充電時間: 2700秒"
    );
    assert_eq!(text(SlotKey::PageUrl), "https://example.com/env?from=ipad");
}

#[tokio::test]
async fn test_location_slots_from_lookup() {
    let surface = report(IPAD_SNAPSHOT).await;

    assert_eq!(surface.text(SlotKey::IpAddress).unwrap(), "203.0.113.7");
    assert_eq!(surface.text(SlotKey::Country).unwrap(), "JP (Japan)");
    let location = surface.get(SlotKey::Location).unwrap();
    assert!(matches!(location.content, SlotContent::Markup(_)));
    assert!(
        location
            .content
            .as_str()
            .contains("https://maps.google.com/?q=35.6940,139.7536")
    );
}

#[tokio::test]
async fn test_vendor_prefixed_connection() {
    let snapshot = r#"{
        "userAgent": "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
        "connection": { "type": "cellular", "effectiveType": "3g", "downlink": 1.5, "rtt": 0 },
        "connectionProperty": "mozConnection"
    }"#;
    let surface = report(snapshot).await;

    assert_eq!(surface.text(SlotKey::ConnectionType).unwrap(), "cellular");
    assert_eq!(surface.text(SlotKey::EffectiveConnectionType).unwrap(), "3g");
    assert_eq!(surface.text(SlotKey::DownlinkSpeed).unwrap(), "1.5 Mbps");
    assert_eq!(surface.text(SlotKey::Rtt).unwrap(), "情報なし");
    assert_eq!(surface.text(SlotKey::BatteryStatus).unwrap(), "APIが利用できません");
    assert_eq!(surface.text(SlotKey::BrowserBits).unwrap(), "64bit");
}
