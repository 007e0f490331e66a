use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use std::sync::Arc;

use super::validation::{validate_latitude, validate_longitude, validate_page};
use super::{ApiError, AppState};
use crate::models::{BusinessListing, paginate};

#[derive(Debug, Deserialize)]
pub struct BusinessParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub page: Option<String>,
}

pub async fn get_businesses(
    State(state): State<Arc<AppState>>,
    params: Result<Query<BusinessParams>, QueryRejection>,
) -> Result<Json<Vec<BusinessListing>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::validation(e.body_text()))?;
    let latitude = validate_latitude(params.latitude.as_deref())?;
    let longitude = validate_longitude(params.longitude.as_deref())?;
    let page = validate_page(params.page.as_deref())?;

    let businesses = state.shared.yelp.search(latitude, longitude).await?;
    let listings: Vec<BusinessListing> = businesses.into_iter().map(Into::into).collect();

    Ok(Json(paginate(listings, page)))
}
