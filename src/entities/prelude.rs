pub use super::locations::Entity as Locations;
