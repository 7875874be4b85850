use std::fmt;

#[derive(Debug)]
pub enum GenError {
    InvalidParameter(String),
    InvalidDistribution(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            GenError::InvalidDistribution(msg) => write!(f, "Invalid distribution: {}", msg),
            GenError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            GenError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for GenError {}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            GenError::DeserializationError(err.to_string())
        } else {
            GenError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;
