pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use normalize::{
    extract_region, normalize_available_time, normalize_place, normalize_weekday, Region,
};
pub use types::{AddressComponent, PlaceDetails, PlaceSummary, SearchPage};
