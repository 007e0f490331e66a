//! Normalized response shapes and the mappers that build them from provider data.

pub mod business;
pub mod location;
pub mod movie;
pub mod trail;
pub mod weather;

pub use business::{BusinessListing, PAGE_SIZE, paginate};
pub use location::Location;
pub use movie::Movie;
pub use trail::Trail;
pub use weather::Weather;
