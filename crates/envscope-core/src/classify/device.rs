//! Coarse device class from the agent string.

use regex::Regex;
use std::sync::LazyLock;

static MOBILE_SIGNATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Mobi|Android").expect("mobile signature is valid"));
static TABLET_SIGNATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Tablet|iPad").expect("tablet signature is valid"));

/// Device class derived from agent signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

/// Classify an agent string. The mobile signature is checked first, so an
/// agent carrying both signatures is mobile.
pub fn classify_device(agent: &str) -> DeviceClass {
    if MOBILE_SIGNATURE.is_match(agent) {
        DeviceClass::Mobile
    } else if TABLET_SIGNATURE.is_match(agent) {
        DeviceClass::Tablet
    } else {
        DeviceClass::Desktop
    }
}
