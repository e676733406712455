use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("host audio service returned status {0}")]
    Host(i32),

    #[error("host wrote {actual} bytes, expected {expected}")]
    UnexpectedSize { expected: u32, actual: u32 },

    #[error("platform not supported: {0}")]
    PlatformNotSupported(String),
}

impl QueryError {
    /// Raw status code from the host, when the host produced one.
    pub fn status(&self) -> Option<i32> {
        match self {
            QueryError::Host(code) => Some(*code),
            _ => None,
        }
    }
}
