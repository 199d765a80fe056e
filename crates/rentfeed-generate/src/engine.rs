use rand::Rng;

use rentfeed_core::{PropertyRecord, RecordCount};

use crate::errors::GenerationError;
use crate::home::generate_home_data;
use crate::rental::generate_rental_extension;

/// Generates `count` fully randomized property records.
///
/// Shape is deterministic; values are drawn fresh from `rng` on every call.
/// `count` is a validated [`RecordCount`], so an invalid size cannot reach
/// this boundary.
pub fn generate_records(
    count: RecordCount,
    rng: &mut impl Rng,
) -> Result<Vec<PropertyRecord>, GenerationError> {
    let count = usize::from(count);
    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(generate_record(rng)?);
    }
    Ok(records)
}

/// Single record: home data and rental extension, independently randomized.
pub fn generate_record(rng: &mut impl Rng) -> Result<PropertyRecord, GenerationError> {
    Ok(PropertyRecord {
        home_data: generate_home_data(rng),
        rental_extension: generate_rental_extension(rng)?,
    })
}
