use std::fmt;

/// Result type for commviz-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared by the types and engine layers
#[derive(Debug)]
pub enum Error {
    /// Value outside the recognized set (unknown topic, phase out of range)
    InvalidArgument(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Persisted data could not be encoded or decoded
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::InvalidArgument(_) | Error::Serialization(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
