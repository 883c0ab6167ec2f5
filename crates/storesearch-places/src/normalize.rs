//! Mapping of Places details responses into exported [`StoreRecord`]s.
//!
//! Everything here is pure: plain data in, plain data out, no I/O.

use chrono::Weekday;
use storesearch_core::{AvailableTime, StoreRecord};

use crate::types::{AddressComponent, OpeningHours, PlaceDetails};

/// Country, state and city short names pulled from address components.
///
/// Each field is empty when no component carries the matching tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub country: String,
    pub state: String,
    pub city: String,
}

/// Converts a Places day number (0 = Sunday .. 6 = Saturday) into a
/// [`Weekday`].
///
/// Returns `None` for values outside `0..=6`.
#[must_use]
pub fn normalize_weekday(day: u8) -> Option<Weekday> {
    match day {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Builds the weekday → `(open, close)` map from a place's opening hours.
///
/// Keys are ISO weekday numbers, so Sunday (0 on the wire) becomes 7. Periods
/// are keyed on their opening day; when several periods open on the same day
/// the last one wins. A missing close time is stored as an empty string.
///
/// Returns `None` when there are no usable periods, so the field is left out
/// of the export rather than written as an empty object.
#[must_use]
pub fn normalize_available_time(hours: Option<&OpeningHours>) -> Option<AvailableTime> {
    let periods = &hours?.periods;

    let mut available = AvailableTime::new();
    for period in periods {
        let Some(weekday) = normalize_weekday(period.open.day) else {
            tracing::warn!(day = period.open.day, "skipping opening period with unknown day");
            continue;
        };
        let close = period
            .close
            .as_ref()
            .map(|c| c.time.clone())
            .unwrap_or_default();
        available.insert(
            weekday.number_from_monday(),
            (period.open.time.clone(), close),
        );
    }

    if available.is_empty() {
        None
    } else {
        Some(available)
    }
}

/// Extracts country, state and city from tagged address components.
///
/// Only `country`, `administrative_area_level_1` and `locality` are read;
/// every other tag is ignored. The component's short name is used, and a
/// later component overrides an earlier one carrying the same tag.
#[must_use]
pub fn extract_region(components: &[AddressComponent]) -> Region {
    let mut region = Region::default();
    for component in components {
        for tag in &component.types {
            let slot = match tag.as_str() {
                "country" => &mut region.country,
                "administrative_area_level_1" => &mut region.state,
                "locality" => &mut region.city,
                _ => continue,
            };
            slot.clone_from(&component.short_name);
        }
    }
    region
}

/// Converts a [`PlaceDetails`] response into the exported [`StoreRecord`].
#[must_use]
pub fn normalize_place(details: &PlaceDetails) -> StoreRecord {
    let Region {
        country,
        state,
        city,
    } = extract_region(&details.address_components);

    StoreRecord {
        place_id: details.place_id.clone(),
        name: details.name.clone(),
        latitude: details.geometry.location.lat,
        longitude: details.geometry.location.lng,
        phone: details
            .international_phone_number
            .clone()
            .unwrap_or_default(),
        address: details.formatted_address.clone().unwrap_or_default(),
        country,
        state,
        city,
        available_time: normalize_available_time(details.opening_hours.as_ref()),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
