#[cfg(not(target_os = "macos"))]
use micprobe_core::{AudioHost, DeviceId, QueryError};

/// The process-wide CoreAudio hardware service, accessed through property
/// reads against the system audio object.
pub struct SystemHost;

impl SystemHost {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_os = "macos")]
mod imp {
    use std::mem;
    use std::os::raw::c_void;
    use std::ptr;

    use coreaudio_sys::{
        kAudioObjectSystemObject, AudioDeviceID, AudioObjectGetPropertyData, AudioObjectID,
        AudioObjectPropertyAddress,
    };

    use super::SystemHost;
    use crate::property::{
        DEFAULT_INPUT_DEVICE_PROPERTY_ADDRESS, NOMINAL_SAMPLE_RATE_PROPERTY_ADDRESS,
    };
    use micprobe_core::{AudioHost, DeviceId, QueryError};

    /// Single synchronous property read against `object`, writing into a
    /// zeroed `T`. Fails when the host reports a non-zero status or writes a
    /// result of an unexpected size; the destination never escapes in either
    /// case.
    fn get_property<T: Default>(
        object: AudioObjectID,
        address: &AudioObjectPropertyAddress,
    ) -> Result<T, QueryError> {
        let mut value = T::default();
        let expected = mem::size_of::<T>() as u32;
        let mut size = expected;

        let status = unsafe {
            AudioObjectGetPropertyData(
                object,
                address,
                0,
                ptr::null(),
                &mut size,
                &mut value as *mut T as *mut c_void,
            )
        };

        if status != 0 {
            tracing::debug!(status, "property read failed");
            return Err(QueryError::Host(status));
        }
        if size != expected {
            return Err(QueryError::UnexpectedSize {
                expected,
                actual: size,
            });
        }
        Ok(value)
    }

    impl AudioHost for SystemHost {
        fn default_input_device(&self) -> Result<DeviceId, QueryError> {
            let id: AudioDeviceID = get_property(
                kAudioObjectSystemObject,
                &DEFAULT_INPUT_DEVICE_PROPERTY_ADDRESS,
            )?;
            Ok(DeviceId::new(id))
        }

        fn nominal_sample_rate(&self, device: DeviceId) -> Result<f64, QueryError> {
            get_property(device.raw(), &NOMINAL_SAMPLE_RATE_PROPERTY_ADDRESS)
        }
    }
}

#[cfg(not(target_os = "macos"))]
impl AudioHost for SystemHost {
    fn default_input_device(&self) -> Result<DeviceId, QueryError> {
        Err(QueryError::PlatformNotSupported(
            "CoreAudio is only available on macOS".to_string(),
        ))
    }

    fn nominal_sample_rate(&self, _device: DeviceId) -> Result<f64, QueryError> {
        Err(QueryError::PlatformNotSupported(
            "CoreAudio is only available on macOS".to_string(),
        ))
    }
}
