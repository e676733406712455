use crate::device::DeviceId;
use crate::error::QueryError;

/// Read-only view of the host-owned audio hardware state.
///
/// The host audio subsystem is process-wide ambient state outside this
/// program's control; this trait is the narrow seam that lets the real
/// backend and a test fake stand in for each other. Every method is a
/// synchronous, blocking, side-effect-free property read, so concurrent
/// callers are safe and repeated calls against unchanged host state return
/// identical results.
pub trait AudioHost {
    /// Identifier of the device the host currently designates as the
    /// default audio capture source.
    fn default_input_device(&self) -> Result<DeviceId, QueryError>;

    /// Nominal sample rate of `device` in Hz.
    fn nominal_sample_rate(&self, device: DeviceId) -> Result<f64, QueryError>;
}
