//! Browser architecture bits from agent markers.

const MARKERS_64: [&str; 5] = ["WOW64", "Win64", "x86_64", "x64", "amd64"];
const MARKERS_32: [&str; 2] = ["i686", "x86"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Architecture {
    Bits64,
    Bits32,
    Unknown,
}

impl Architecture {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bits64 => "64bit",
            Self::Bits32 => "32bit",
            Self::Unknown => "unknown",
        }
    }
}

/// Scan for 64-bit markers first; `x86_64` also contains `x86`, so the
/// order matters.
pub fn detect_architecture(agent: &str) -> Architecture {
    if MARKERS_64.iter().any(|m| agent.contains(m)) {
        Architecture::Bits64
    } else if MARKERS_32.iter().any(|m| agent.contains(m)) {
        Architecture::Bits32
    } else {
        Architecture::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_64bit_markers() {
        for ua in [
            "Mozilla/5.0 (Windows NT 10.0; WOW64)",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64)",
            "Mozilla/5.0 (X11; Linux x86_64)",
            "Mozilla/5.0 (X11; FreeBSD amd64)",
        ] {
            assert_eq!(detect_architecture(ua), Architecture::Bits64, "{ua}");
        }
    }

    #[test]
    fn test_64bit_wins_over_32bit_token() {
        assert_eq!(
            detect_architecture("Mozilla/5.0 (X11; Linux i686 on x86_64)"),
            Architecture::Bits64
        );
    }

    #[test]
    fn test_32bit_markers() {
        assert_eq!(
            detect_architecture("Mozilla/5.0 (X11; Linux i686)"),
            Architecture::Bits32
        );
        assert_eq!(
            detect_architecture("Mozilla/5.0 (Windows; U; x86)"),
            Architecture::Bits32
        );
    }

    #[test]
    fn test_no_marker_is_unknown() {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15";
        assert_eq!(detect_architecture(ua), Architecture::Unknown);
    }
}
