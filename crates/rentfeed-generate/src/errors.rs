use thiserror::Error;

/// Errors emitted by the record generator.
///
/// Not expected in normal operation; the request handler maps any of these
/// to an HTTP 500 failure envelope.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid timestamp bounds: {0}")]
    InvalidTimestamp(String),
}
