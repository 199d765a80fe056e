use chrono::NaiveDate;
use fake::Fake;
use fake::faker::address::en::StreetName;
use fake::faker::lorem::en::{Paragraph, Word};
use rand::Rng;

use rentfeed_core::RentalExtension;

use crate::errors::GenerationError;
use crate::sampling::{digits, disjoint_float_range, disjoint_int_range, pick, random_uuid, round_to};

const FEED_SOURCES: &[&str] = &["RentPath", "InternalDB", "ExternalAPI"];
const FEED_ORIGINAL_SOURCES: &[&str] = &["MYADS", "INTERNAL", "EXTERNAL"];

// Disjoint min/max sub-ranges; the gap keeps `min < max` by construction.
const BED_MIN_BOUNDS: (i64, i64) = (0, 2);
const BED_MAX_BOUNDS: (i64, i64) = (3, 5);
const BATH_MIN_BOUNDS: (f64, f64) = (1.0, 2.0);
const BATH_MAX_BOUNDS: (f64, f64) = (2.1, 3.5);
const SQFT_MIN_BOUNDS: (i64, i64) = (500, 1000);
const SQFT_MAX_BOUNDS: (i64, i64) = (1100, 2000);
const RENT_MIN_BOUNDS: (i64, i64) = (2000, 3000);
const RENT_MAX_BOUNDS: (i64, i64) = (3100, 5000);

const BATH_SCALE: i32 = 1;
const RANK_SCORE_SCALE: i32 = 2;
const REVENUE_SCALE: i32 = 5;

const RANK_SCORE_BOUNDS: (f64, f64) = (0.5, 1.5);
const REVENUE_BOUNDS: (f64, f64) = (10.0, 50.0);
const AVAILABLE_UNITS_BOUNDS: (i64, i64) = (1, 100);
const STATUS_BOUNDS: (i64, i64) = (0, 2);
const PAGE_TYPE_BOUNDS: (i64, i64) = (1, 10);

const PHONE_DIGITS: usize = 10;

// Sampling window for lastUpdated / freshnessTimestamp.
const TIMESTAMP_MIN: (i32, u32, u32) = (2020, 1, 1);
const TIMESTAMP_MAX: (i32, u32, u32) = (2025, 12, 31);

pub fn generate_rental_extension(rng: &mut impl Rng) -> Result<RentalExtension, GenerationError> {
    Ok(RentalExtension {
        rental_id: random_uuid(rng).to_string(),
        bed_range: disjoint_int_range(rng, BED_MIN_BOUNDS, BED_MAX_BOUNDS),
        bath_range: disjoint_float_range(rng, BATH_MIN_BOUNDS, BATH_MAX_BOUNDS, BATH_SCALE),
        sqft_range: disjoint_int_range(rng, SQFT_MIN_BOUNDS, SQFT_MAX_BOUNDS),
        rent_price_range: disjoint_int_range(rng, RENT_MIN_BOUNDS, RENT_MAX_BOUNDS),
        last_updated: iso_timestamp(rng)?,
        num_available_units: rng
            .random_range(AVAILABLE_UNITS_BOUNDS.0..=AVAILABLE_UNITS_BOUNDS.1),
        status: rng.random_range(STATUS_BOUNDS.0..=STATUS_BOUNDS.1),
        property_name: StreetName().fake_with_rng(rng),
        rental_details_page_type: rng.random_range(PAGE_TYPE_BOUNDS.0..=PAGE_TYPE_BOUNDS.1),
        rental_property_external_url: external_url(rng),
        search_rank_score: round_to(
            rng.random_range(RANK_SCORE_BOUNDS.0..=RANK_SCORE_BOUNDS.1),
            RANK_SCORE_SCALE,
        ),
        freshness_timestamp: iso_timestamp(rng)?,
        description: Paragraph(3..6).fake_with_rng(rng),
        revenue_per_lead: round_to(
            rng.random_range(REVENUE_BOUNDS.0..=REVENUE_BOUNDS.1),
            REVENUE_SCALE,
        ),
        feed_source_internal_id: digits(rng, 9),
        is_commercial_paid: rng.random_bool(0.5),
        feed_original_source: pick(rng, FEED_ORIGINAL_SOURCES).to_string(),
        desktop_phone: digits(rng, PHONE_DIGITS),
        mobile_web_phone: digits(rng, PHONE_DIGITS),
        mobile_app_phone: digits(rng, PHONE_DIGITS),
        feed_source: pick(rng, FEED_SOURCES).to_string(),
    })
}

/// ISO-8601 timestamp without timezone, uniform over the sampling window.
fn iso_timestamp(rng: &mut impl Rng) -> Result<String, GenerationError> {
    let min = timestamp_bound(TIMESTAMP_MIN, 0, 0, 0)?;
    let max = timestamp_bound(TIMESTAMP_MAX, 23, 59, 59)?;
    let span = (max - min).num_seconds();
    let offset = rng.random_range(0..=span);
    let sampled = min + chrono::Duration::seconds(offset);
    Ok(sampled.format("%Y-%m-%dT%H:%M:%S").to_string())
}

fn timestamp_bound(
    (year, month, day): (i32, u32, u32),
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<chrono::NaiveDateTime, GenerationError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(|| {
            GenerationError::InvalidTimestamp(format!("{year:04}-{month:02}-{day:02}"))
        })
}

fn external_url(rng: &mut impl Rng) -> String {
    let word: String = Word().fake_with_rng(rng);
    format!("https://www.{word}.com/")
}
