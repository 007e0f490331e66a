use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use super::validation::{validate_latitude, validate_longitude};
use super::{ApiError, AppState, CoordinateParams};
use crate::models::Weather;

pub async fn get_weather(
    State(state): State<Arc<AppState>>,
    params: Result<Query<CoordinateParams>, QueryRejection>,
) -> Result<Json<Vec<Weather>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::validation(e.body_text()))?;
    let latitude = validate_latitude(params.latitude.as_deref())?;
    let longitude = validate_longitude(params.longitude.as_deref())?;

    let days = state
        .shared
        .weather
        .daily_forecast(latitude, longitude)
        .await?;

    Ok(Json(days.into_iter().map(Weather::from).collect()))
}
