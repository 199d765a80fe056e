use serde::{Deserialize, Serialize};

/// A single synthetic property listing, regenerated fresh on every request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    /// Listing data shared with for-sale inventory.
    pub home_data: HomeData,
    /// Rental-specific extension. Always present, independently randomized.
    pub rental_extension: RentalExtension,
}

/// Listing core: identifiers, media and address block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    /// Numeric string identifier, nine digits.
    pub property_id: String,
    /// URL slug of the form `/{state}/{city}/{word}/{id}`.
    pub url: String,
    /// Property type code, 1..=10.
    pub property_type: i64,
    pub photos_info: PhotosInfo,
    pub sashes: Vec<Sash>,
    pub static_map_url: String,
    pub has_att_fiber: bool,
    pub address_info: AddressInfo,
    pub photos: PhotoSet,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhotosInfo {
    pub photo_ranges: Vec<PhotoRange>,
}

/// Index range into a listing's photo carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRange {
    pub start_pos: i64,
    pub end_pos: i64,
    pub version: String,
}

/// Display-variant metadata attached to a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sash {
    pub sash_type_id: i64,
    pub sash_type_name: String,
    pub sash_type_color: String,
    /// Either an eight-digit numeric string or null.
    pub time_on_redfin: Option<String>,
}

/// Address block with the geo centroid nested two levels deep, matching the
/// upstream feed shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    pub centroid: Centroid,
    pub formatted_street_line: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub streetline_display_level: i64,
    pub unit_number_display_level: i64,
    pub location_display_level: i64,
    pub country_code: i64,
    pub postal_code_display_level: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Centroid {
    pub centroid: CentroidPoint,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CentroidPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Small and big photo URL lists. Invariant: both lists have the same
/// length, sampled once per record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSet {
    pub small_photos: Vec<String>,
    pub big_photos: Vec<String>,
}

/// Inclusive integer bound pair. Invariant: `min < max` by construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

/// Inclusive float bound pair rounded to a fixed decimal precision.
/// Invariant: `min < max` by construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

/// Rental-specific listing fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RentalExtension {
    /// UUID v4 string.
    pub rental_id: String,
    pub bed_range: IntRange,
    /// One decimal place on both bounds.
    pub bath_range: FloatRange,
    pub sqft_range: IntRange,
    pub rent_price_range: IntRange,
    /// ISO-8601 timestamp without timezone.
    pub last_updated: String,
    pub num_available_units: i64,
    pub status: i64,
    pub property_name: String,
    pub rental_details_page_type: i64,
    pub rental_property_external_url: String,
    /// Two decimal places.
    pub search_rank_score: f64,
    /// ISO-8601 timestamp without timezone.
    pub freshness_timestamp: String,
    pub description: String,
    /// Five decimal places.
    pub revenue_per_lead: f64,
    pub feed_source_internal_id: String,
    pub is_commercial_paid: bool,
    pub feed_original_source: String,
    pub desktop_phone: String,
    pub mobile_web_phone: String,
    pub mobile_app_phone: String,
    pub feed_source: String,
}
