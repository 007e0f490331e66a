pub mod location;
pub use location::{Geocoder, LocationError, LocationResolver, LocationStore};
