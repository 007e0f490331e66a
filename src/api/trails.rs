use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use super::validation::{validate_latitude, validate_longitude};
use super::{ApiError, AppState, CoordinateParams};
use crate::models::Trail;

pub async fn get_trails(
    State(state): State<Arc<AppState>>,
    params: Result<Query<CoordinateParams>, QueryRejection>,
) -> Result<Json<Vec<Trail>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::validation(e.body_text()))?;
    let latitude = validate_latitude(params.latitude.as_deref())?;
    let longitude = validate_longitude(params.longitude.as_deref())?;

    let trails = state.shared.trails.nearby(latitude, longitude).await?;

    Ok(Json(trails.into_iter().map(Trail::from).collect()))
}
