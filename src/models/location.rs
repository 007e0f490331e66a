use serde::{Deserialize, Serialize};

use crate::clients::geocode::GeocodePlace;

/// A resolved place, keyed by the query exactly as the caller typed it.
///
/// Coordinates stay in the geocoder's textual form so no precision is lost
/// between the provider, the cache table and the response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub search_query: String,
    pub formatted_query: String,
    pub latitude: String,
    pub longitude: String,
}

impl Location {
    #[must_use]
    pub fn from_place(search_query: &str, place: GeocodePlace) -> Self {
        Self {
            search_query: search_query.to_string(),
            formatted_query: place.display_name,
            latitude: place.lat,
            longitude: place.lon,
        }
    }
}
