//! Synthetic listing-record generation for rentfeed.
//!
//! This crate produces [`PropertyRecord`](rentfeed_core::PropertyRecord)
//! values that are deterministic in shape and randomized in value. The RNG
//! is injected so tests can drive generation from a seeded source.

pub mod engine;
pub mod errors;
pub mod home;
pub mod rental;
mod sampling;

pub use engine::{generate_record, generate_records};
pub use errors::GenerationError;
