//! Device memory hint.
//!
//! Browsers do not expose exact RAM; they report a power of two between
//! 0.25 and 8 GB. The native provider reports the same coarse value.

use sysinfo::System;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const MIN_GB: f64 = 0.25;
const MAX_GB: f64 = 8.0;

/// Total RAM bucketed the way browsers bucket `deviceMemory`.
pub fn device_memory() -> Option<f64> {
    let mut system = System::new();
    system.refresh_memory();
    bucket_device_memory(system.total_memory())
}

/// Round to the nearest power of two in gigabytes, clamped to `0.25..=8`.
/// Zero bytes means the host could not tell.
#[allow(clippy::cast_precision_loss)]
pub fn bucket_device_memory(total_bytes: u64) -> Option<f64> {
    if total_bytes == 0 {
        return None;
    }
    let gb = total_bytes as f64 / GIB;
    let rounded = gb.log2().round().exp2();
    Some(rounded.clamp(MIN_GB, MAX_GB))
}
