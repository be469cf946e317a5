//! Agent and platform strings for a native process.
//!
//! Shaped like browser agents so the core signature matching applies
//! unchanged: OS tokens and architecture markers sit in the parenthesized
//! comment.

/// Synthesized agent string, e.g.
/// `Mozilla/5.0 (X11; Linux x86_64) envscope/0.3.0`.
pub fn user_agent(os: &str, arch: &str, version: &str) -> String {
    format!("Mozilla/5.0 ({}) envscope/{version}", os_comment(os, arch))
}

fn os_comment(os: &str, arch: &str) -> String {
    match os {
        "windows" => {
            let bits = if arch == "x86_64" { "Win64; x64" } else { arch };
            format!("Windows NT 10.0; {bits}")
        }
        "macos" => {
            let cpu = if arch == "aarch64" { "ARM" } else { "Intel" };
            format!("Macintosh; {cpu} Mac OS X")
        }
        "linux" => format!("X11; Linux {arch}"),
        "android" => format!("Linux; Android; {arch}"),
        "ios" => "iPhone; CPU iPhone OS like Mac OS X".to_string(),
        other => format!("{other}; {arch}"),
    }
}

/// Navigator-style platform string.
pub fn platform(os: &str, arch: &str) -> String {
    match os {
        "windows" => "Win32".to_string(),
        "macos" => "MacIntel".to_string(),
        "linux" => format!("Linux {arch}"),
        other => format!("{other} {arch}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envscope_core::classify::{Architecture, OperatingSystem, detect_architecture, identify_os};

    #[test]
    fn test_linux_agent_classifies() {
        let agent = user_agent("linux", "x86_64", "0.3.0");
        assert_eq!(agent, "Mozilla/5.0 (X11; Linux x86_64) envscope/0.3.0");
        assert_eq!(identify_os(&agent), Some(OperatingSystem::Linux));
        assert_eq!(detect_architecture(&agent), Architecture::Bits64);
    }

    #[test]
    fn test_windows_agent_classifies() {
        let agent = user_agent("windows", "x86_64", "0.3.0");
        assert_eq!(identify_os(&agent), Some(OperatingSystem::Windows));
        assert_eq!(detect_architecture(&agent), Architecture::Bits64);
    }

    #[test]
    fn test_macos_arm_agent() {
        let agent = user_agent("macos", "aarch64", "0.3.0");
        assert_eq!(identify_os(&agent), Some(OperatingSystem::MacOs));
        assert_eq!(detect_architecture(&agent), Architecture::Unknown);
    }

    #[test]
    fn test_platform_strings() {
        assert_eq!(platform("linux", "aarch64"), "Linux aarch64");
        assert_eq!(platform("windows", "x86_64"), "Win32");
        assert_eq!(platform("macos", "aarch64"), "MacIntel");
    }
}
