//! Browser and OS identification from the agent string.
//!
//! Both lists are first-match-wins. Chromium derivatives also carry a
//! `Chrome/` token, so anything that must be told apart from Chrome has to
//! sit above it.

use regex::Regex;
use std::sync::LazyLock;

/// A named browser signature with a version capture group.
struct BrowserSignature {
    name: &'static str,
    pattern: Regex,
}

static BROWSER_SIGNATURES: LazyLock<Vec<BrowserSignature>> = LazyLock::new(|| {
    [
        ("Firefox", r"Firefox/(\d+)"),
        ("Edge", r"Edg/(\d+)"),
        ("Chrome", r"Chrome/(\d+)"),
        ("Safari", r"Version/(\d+)"),
        ("Opera", r"OPR/(\d+)"),
    ]
    .into_iter()
    .map(|(name, pattern)| BrowserSignature {
        name,
        pattern: Regex::new(pattern).expect("browser signature is valid"),
    })
    .collect()
});

/// A matched browser and its major version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserMatch {
    pub name: &'static str,
    pub version: String,
}

/// Identify the browser; `None` when no signature matches.
pub fn identify_browser(agent: &str) -> Option<BrowserMatch> {
    BROWSER_SIGNATURES.iter().find_map(|signature| {
        let captures = signature.pattern.captures(agent)?;
        Some(BrowserMatch {
            name: signature.name,
            version: captures.get(1)?.as_str().to_string(),
        })
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingSystem {
    Windows,
    MacOs,
    Linux,
    Android,
    Ios,
}

impl OperatingSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
            Self::Android => "Android",
            Self::Ios => "iOS",
        }
    }
}

/// Identify the OS by ordered substring checks.
///
/// Android agents also contain `Linux` and iOS agents contain `Mac OS X`,
/// so those branches only fire for agents that omit the broader token.
pub fn identify_os(agent: &str) -> Option<OperatingSystem> {
    if agent.contains("Windows") {
        Some(OperatingSystem::Windows)
    } else if agent.contains("Mac") {
        Some(OperatingSystem::MacOs)
    } else if agent.contains("Linux") {
        Some(OperatingSystem::Linux)
    } else if agent.contains("Android") {
        Some(OperatingSystem::Android)
    } else if ["iPhone", "iPad", "iPod"].iter().any(|t| agent.contains(t)) {
        Some(OperatingSystem::Ios)
    } else {
        None
    }
}
