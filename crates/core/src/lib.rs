mod device;
mod error;
mod host;
mod query;

pub use device::{DeviceId, InputDeviceReport};
pub use error::QueryError;
pub use host::AudioHost;
pub use query::DeviceQuery;
