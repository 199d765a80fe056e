use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, Latitude, Longitude, StateAbbr, StreetName, StreetSuffix, ZipCode,
};
use fake::faker::color::en::HexColor;
use fake::faker::lorem::en::{Sentence, Word};
use rand::Rng;

use rentfeed_core::{
    AddressInfo, Centroid, CentroidPoint, HomeData, PhotoRange, PhotoSet, PhotosInfo, Sash,
};

use crate::sampling::{digits, pick, random_uuid};

const PHOTO_BASE_URL: &str = "https://ssl.cdn-redfin.com/photo/rent/";
const PHOTO_RANGE_VERSIONS: &[&str] = &["1", "2"];

const PROPERTY_TYPE_BOUNDS: (i64, i64) = (1, 10);
const SASH_TYPE_ID_BOUNDS: (i64, i64) = (1, 50);
const SASH_COUNT_BOUNDS: (usize, usize) = (1, 3);
const PHOTO_RANGE_COUNT_BOUNDS: (usize, usize) = (1, 5);
const PHOTO_COUNT_BOUNDS: (usize, usize) = (30, 60);
const POSITION_BOUNDS: (i64, i64) = (0, 100);

/// Probability that a sash carries a `timeOnRedfin` value.
const TIME_ON_REDFIN_RATE: f64 = 0.5;

/// Address display levels are fixed constants in the upstream feed.
const DISPLAY_LEVEL: i64 = 1;

pub fn generate_home_data(rng: &mut impl Rng) -> HomeData {
    // One length draw shared by both photo lists; the URLs themselves are
    // generated independently per list.
    let photo_count = rng.random_range(PHOTO_COUNT_BOUNDS.0..=PHOTO_COUNT_BOUNDS.1);

    let sash_count = rng.random_range(SASH_COUNT_BOUNDS.0..=SASH_COUNT_BOUNDS.1);
    let photo_range_count =
        rng.random_range(PHOTO_RANGE_COUNT_BOUNDS.0..=PHOTO_RANGE_COUNT_BOUNDS.1);

    HomeData {
        property_id: digits(rng, 9),
        url: listing_slug(rng),
        property_type: rng.random_range(PROPERTY_TYPE_BOUNDS.0..=PROPERTY_TYPE_BOUNDS.1),
        photos_info: PhotosInfo {
            photo_ranges: (0..photo_range_count)
                .map(|_| generate_photo_range(rng))
                .collect(),
        },
        sashes: (0..sash_count).map(|_| generate_sash(rng)).collect(),
        static_map_url: static_map_url(rng),
        has_att_fiber: rng.random_bool(0.5),
        address_info: generate_address(rng),
        photos: PhotoSet {
            small_photos: photo_urls(rng, photo_count),
            big_photos: photo_urls(rng, photo_count),
        },
    }
}

fn generate_photo_range(rng: &mut impl Rng) -> PhotoRange {
    PhotoRange {
        start_pos: rng.random_range(POSITION_BOUNDS.0..=POSITION_BOUNDS.1),
        end_pos: rng.random_range(POSITION_BOUNDS.0..=POSITION_BOUNDS.1),
        version: pick(rng, PHOTO_RANGE_VERSIONS).to_string(),
    }
}

fn generate_sash(rng: &mut impl Rng) -> Sash {
    let time_on_redfin = if rng.random_bool(TIME_ON_REDFIN_RATE) {
        Some(digits(rng, 8))
    } else {
        None
    };
    Sash {
        sash_type_id: rng.random_range(SASH_TYPE_ID_BOUNDS.0..=SASH_TYPE_ID_BOUNDS.1),
        sash_type_name: Sentence(4..6).fake_with_rng(rng),
        sash_type_color: HexColor().fake_with_rng(rng),
        time_on_redfin,
    }
}

fn generate_address(rng: &mut impl Rng) -> AddressInfo {
    let building: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let suffix: String = StreetSuffix().fake_with_rng(rng);
    AddressInfo {
        centroid: Centroid {
            centroid: CentroidPoint {
                latitude: Latitude().fake_with_rng(rng),
                longitude: Longitude().fake_with_rng(rng),
            },
        },
        formatted_street_line: format!("{building} {street} {suffix}"),
        city: CityName().fake_with_rng(rng),
        state: StateAbbr().fake_with_rng(rng),
        zip: ZipCode().fake_with_rng(rng),
        streetline_display_level: DISPLAY_LEVEL,
        unit_number_display_level: DISPLAY_LEVEL,
        location_display_level: DISPLAY_LEVEL,
        country_code: DISPLAY_LEVEL,
        postal_code_display_level: DISPLAY_LEVEL,
    }
}

fn listing_slug(rng: &mut impl Rng) -> String {
    let state: String = StateAbbr().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let word: String = Word().fake_with_rng(rng);
    format!(
        "/{state}/{}/{word}/{}",
        city.replace(' ', "-"),
        digits(rng, 9)
    )
}

fn static_map_url(rng: &mut impl Rng) -> String {
    format!(
        "https://ssl.cdn-redfin.com/system_files/media/map/{}.png",
        random_uuid(rng)
    )
}

/// Templated CDN URLs: fresh token per element, sequential index, random
/// size suffix.
fn photo_urls(rng: &mut impl Rng, count: usize) -> Vec<String> {
    (0..count)
        .map(|index| {
            format!(
                "{PHOTO_BASE_URL}{}/islphoto/genIsl.{index}_{}.jpg",
                random_uuid(rng),
                rng.random_range(1..=2)
            )
        })
        .collect()
}
