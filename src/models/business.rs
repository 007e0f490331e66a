use serde::Serialize;

use crate::clients::yelp::YelpBusiness;

/// Listings per page of the business search.
pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessListing {
    pub name: String,
    pub image_url: String,
    pub url: String,
    pub rating: f64,
    pub price: Option<String>,
}

impl From<YelpBusiness> for BusinessListing {
    fn from(business: YelpBusiness) -> Self {
        Self {
            name: business.name,
            image_url: business.image_url,
            url: business.url,
            rating: business.rating,
            price: business.price,
        }
    }
}

/// Returns the 1-indexed `page` of `items`; pages past the end are empty.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    items.into_iter().skip(start).take(PAGE_SIZE).collect()
}
