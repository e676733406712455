#[cfg(target_os = "macos")]
mod property;

mod host;

pub use host::SystemHost;
pub use micprobe_core::{AudioHost, DeviceId, InputDeviceReport, QueryError};
