use rand::Rng;

use rentfeed_core::{FloatRange, IntRange};

/// Rounds to `scale` decimal places.
pub(crate) fn round_to(value: f64, scale: i32) -> f64 {
    let factor = 10_f64.powi(scale);
    (value * factor).round() / factor
}

/// Samples `min` and `max` from two disjoint inclusive sub-ranges.
/// `min < max` holds by construction, never by rejection or swap.
pub(crate) fn disjoint_int_range(
    rng: &mut impl Rng,
    min_bounds: (i64, i64),
    max_bounds: (i64, i64),
) -> IntRange {
    debug_assert!(min_bounds.1 < max_bounds.0);
    IntRange {
        min: rng.random_range(min_bounds.0..=min_bounds.1),
        max: rng.random_range(max_bounds.0..=max_bounds.1),
    }
}

/// Float variant of [`disjoint_int_range`], rounded to `scale` decimals.
/// The sub-ranges must stay disjoint after rounding.
pub(crate) fn disjoint_float_range(
    rng: &mut impl Rng,
    min_bounds: (f64, f64),
    max_bounds: (f64, f64),
    scale: i32,
) -> FloatRange {
    debug_assert!(min_bounds.1 < max_bounds.0);
    FloatRange {
        min: round_to(rng.random_range(min_bounds.0..=min_bounds.1), scale),
        max: round_to(rng.random_range(max_bounds.0..=max_bounds.1), scale),
    }
}

/// Fixed-length numeric string; leading zeros allowed.
pub(crate) fn digits(rng: &mut impl Rng, len: usize) -> String {
    let mut value = String::with_capacity(len);
    for _ in 0..len {
        value.push(char::from(b'0' + rng.random_range(0..10u8)));
    }
    value
}

/// Uniform pick from a fixed enumeration of literals.
pub(crate) fn pick<'a>(rng: &mut impl Rng, values: &'a [&'a str]) -> &'a str {
    values[rng.random_range(0..values.len())]
}

/// UUID v4 built from the injected RNG so seeded runs stay reproducible.
pub(crate) fn random_uuid(rng: &mut impl Rng) -> uuid::Uuid {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    uuid::Uuid::from_bytes(bytes)
}
