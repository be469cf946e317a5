//! Agent-string signature matching.
//!
//! Pure functions with no I/O; the reporter maps their results to display
//! text.

mod arch;
mod browser;
mod device;

pub use arch::{Architecture, detect_architecture};
pub use browser::{BrowserMatch, OperatingSystem, identify_browser, identify_os};
pub use device::{DeviceClass, classify_device};
