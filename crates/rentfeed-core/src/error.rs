use thiserror::Error;

use crate::config::MAX_RECORDS_PER_REQUEST;

/// Errors raised while building the immutable service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("records per request must be within 1..={}, got {value}", MAX_RECORDS_PER_REQUEST)]
    RecordCountOutOfRange { value: u16 },
    #[error("{name} must not be empty")]
    EmptySecret { name: &'static str },
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
