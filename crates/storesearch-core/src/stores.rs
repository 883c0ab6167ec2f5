//! The exported store record.
//!
//! One [`StoreRecord`] is built per place returned by the Places details
//! endpoint and written, unchanged, into the output JSON array.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Opening hours keyed by ISO weekday number (1 = Monday .. 7 = Sunday).
///
/// Each value is an `(open, close)` pair of `"HHMM"` strings and serializes as
/// a two-element JSON array. The key type serializes as a JSON object key
/// (`"1"`..`"7"`), and the `BTreeMap` keeps the days in ascending order.
pub type AvailableTime = BTreeMap<u32, (String, String)>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    #[serde(rename = "google_place_id")]
    pub place_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: String,
    pub address: String,
    pub country: String,
    pub state: String,
    pub city: String,
    /// `None` when the place publishes no opening-hours periods; the key is
    /// then left out of the JSON entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_time: Option<AvailableTime>,
}
