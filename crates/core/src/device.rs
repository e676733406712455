use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, host-assigned identifier for a connected audio hardware endpoint.
///
/// The raw value is only meaningful while the identified device stays
/// attached; it is read fresh from the host on every query and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(u32);

impl DeviceId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    /// CoreAudio reports `0` when no default input device is configured.
    /// This is a valid success value, not an error. The convention is
    /// documented for CoreAudio only; other hosts may differ.
    pub fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of the default input device as reported by one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDeviceReport {
    pub device: DeviceId,
    /// Nominal sample rate in Hz; `None` when no device is set.
    pub sample_rate: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_id_is_unset() {
        assert!(DeviceId::new(0).is_unset());
        assert!(!DeviceId::new(42).is_unset());
    }

    #[test]
    fn test_display_is_decimal() {
        assert_eq!(DeviceId::new(7).to_string(), "7");
        assert_eq!(DeviceId::new(4294967295).to_string(), "4294967295");
    }
}
