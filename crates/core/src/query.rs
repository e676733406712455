use crate::device::{DeviceId, InputDeviceReport};
use crate::error::QueryError;
use crate::host::AudioHost;

/// One-shot query against the host's default-input-device property.
///
/// Holds no state beyond the host handle: every call re-reads the host, so
/// results track device changes between calls without any notification
/// machinery.
pub struct DeviceQuery<H> {
    host: H,
}

impl<H: AudioHost> DeviceQuery<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Identifier of the current default input device. An unset identifier
    /// (raw value 0) is a successful result meaning no default is configured.
    pub fn default_input_device(&self) -> Result<DeviceId, QueryError> {
        let device = self.host.default_input_device()?;
        tracing::debug!(device = device.raw(), "default input device resolved");
        Ok(device)
    }

    /// Default input device plus its nominal sample rate. The sample-rate
    /// read is skipped when no device is set, since there is nothing to ask.
    pub fn report(&self) -> Result<InputDeviceReport, QueryError> {
        let device = self.default_input_device()?;
        let sample_rate = if device.is_unset() {
            None
        } else {
            Some(self.host.nominal_sample_rate(device)?)
        };
        Ok(InputDeviceReport {
            device,
            sample_rate,
        })
    }
}
