//! Core contracts shared across the rentfeed crates.
//!
//! This crate defines the wire models for synthetic listing records, the
//! response envelope, and the immutable service configuration injected into
//! the HTTP handlers.

pub mod config;
pub mod envelope;
pub mod error;
pub mod record;

pub use config::{MAX_RECORDS_PER_REQUEST, RecordCount, ServiceConfig};
pub use envelope::{EmptyData, EnvelopeData, ResponseEnvelope, ResponseStatus};
pub use error::ConfigError;
pub use record::{
    AddressInfo, Centroid, CentroidPoint, FloatRange, HomeData, IntRange, PhotoRange, PhotoSet,
    PhotosInfo, PropertyRecord, RentalExtension, Sash,
};

/// Service identifier used in logs and the health endpoint.
pub const SERVICE_NAME: &str = "rentfeed";
