//! Locale and time zone resolution from the process environment.

use std::path::Path;

/// Locale tag from POSIX locale variables, in `LC_ALL`, `LC_MESSAGES`,
/// `LANG` precedence. `ja_JP.UTF-8` becomes `ja-JP`; `C` and `POSIX` are
/// treated as unset.
pub fn language_from(var: impl Fn(&str) -> Option<String>) -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(&var)
        .find_map(|value| to_language_tag(&value))
}

fn to_language_tag(posix: &str) -> Option<String> {
    let base = posix.split(['.', '@']).next()?.trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}

/// IANA zone name from `TZ`, then `/etc/timezone`, then the
/// `/etc/localtime` symlink target.
pub fn time_zone_from(
    tz_var: Option<String>,
    etc_timezone: &Path,
    etc_localtime: &Path,
) -> Option<String> {
    if let Some(tz) = tz_var {
        let tz = tz.trim_start_matches(':').trim();
        if !tz.is_empty() && !tz.starts_with('/') {
            return Some(tz.to_string());
        }
    }

    if let Ok(contents) = std::fs::read_to_string(etc_timezone) {
        let name = contents.trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }

    let target = std::fs::read_link(etc_localtime).ok()?;
    let target = target.to_string_lossy();
    let (_, zone) = target.split_once("zoneinfo/")?;
    (!zone.is_empty()).then(|| zone.to_string())
}
