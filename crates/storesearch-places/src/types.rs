//! Google Places API response types.
//!
//! Both endpoints wrap their payload in a `{"status": "OK", ...}` envelope.
//! The client checks `status` on the raw JSON before deserializing into these
//! types, so they only model the success shape.
//!
//! ### Optional fields
//! The API omits keys rather than sending `null` for data it does not have
//! (no phone number, no opening hours, no close time for 24-hour places).
//! Everything except `place_id` is therefore defaulted.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// textsearch
// ---------------------------------------------------------------------------

/// Body of a successful `textsearch/json` response.
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
    /// Present only when another page exists.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A single text-search hit. Only the identifier is needed downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
}

/// One page of search results as returned by
/// [`PlacesClient::text_search`](crate::PlacesClient::text_search).
///
/// `next_page_token` is empty on the last page.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub results: Vec<PlaceSummary>,
    pub next_page_token: String,
}

impl SearchPage {
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.next_page_token.is_empty()
    }
}

// ---------------------------------------------------------------------------
// details
// ---------------------------------------------------------------------------

/// Body of a successful `details/json` response.
#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    pub result: PlaceDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetails {
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default)]
    pub international_phone_number: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub periods: Vec<OpeningPeriod>,
}

/// A single open/close span. `close` is missing for places open around the
/// clock.
#[derive(Debug, Clone, Deserialize)]
pub struct OpeningPeriod {
    pub open: DayTime,
    #[serde(default)]
    pub close: Option<DayTime>,
}

/// `day` counts from Sunday: 0 = Sunday .. 6 = Saturday. `time` is `"HHMM"`.
#[derive(Debug, Clone, Deserialize)]
pub struct DayTime {
    pub day: u8,
    #[serde(default)]
    pub time: String,
}

/// A tagged piece of the formatted address (e.g. tagged `locality`).
#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}
