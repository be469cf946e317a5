//! Display text written into slots.
//!
//! The host page is Japanese; every placeholder and label the reporter
//! renders lives here.

use crate::classify::{Architecture, DeviceClass};

/// Placeholder for an absent optional capability.
pub const NO_INFORMATION: &str = "情報なし";

pub const COOKIES_ENABLED: &str = "有効";
pub const COOKIES_DISABLED: &str = "無効";

pub const TOUCH_SUPPORTED: &str = "サポートあり";
pub const TOUCH_UNSUPPORTED: &str = "サポートなし";

pub const TIMEZONE_UNAVAILABLE: &str = "取得不可";

pub const UNKNOWN: &str = "不明";
pub const UNKNOWN_BROWSER: &str = "不明なブラウザ";
pub const UNKNOWN_OS: &str = "不明なOS";

pub const BATTERY_UNAVAILABLE: &str = "APIが利用できません";
pub const YES: &str = "はい";
pub const NO: &str = "いいえ";

/// Fixed text for a failed geolocation lookup.
pub const LOOKUP_FAILED: &str = "取得失敗";

pub const fn device_class(class: DeviceClass) -> &'static str {
    match class {
        DeviceClass::Mobile => "モバイル",
        DeviceClass::Tablet => "タブレット",
        DeviceClass::Desktop => "デスクトップ",
    }
}

pub const fn architecture(arch: Architecture) -> &'static str {
    match arch {
        Architecture::Bits64 | Architecture::Bits32 => arch.as_str(),
        Architecture::Unknown => UNKNOWN,
    }
}
