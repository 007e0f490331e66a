use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use std::sync::Arc;

use super::validation::validate_required;
use super::{ApiError, AppState};
use crate::models::Location;

#[derive(Debug, Deserialize)]
pub struct LocationParams {
    pub city: Option<String>,
}

pub async fn get_location(
    State(state): State<Arc<AppState>>,
    params: Result<Query<LocationParams>, QueryRejection>,
) -> Result<Json<Location>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::validation(e.body_text()))?;
    let city = validate_required("city", params.city.as_deref())?;

    let location = state.locations().resolve(city).await?;

    Ok(Json(location))
}
