use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use std::sync::Arc;

use super::validation::validate_required;
use super::{ApiError, AppState};
use crate::models::Movie;

#[derive(Debug, Deserialize)]
pub struct MovieParams {
    pub search_query: Option<String>,
}

pub async fn get_movies(
    State(state): State<Arc<AppState>>,
    params: Result<Query<MovieParams>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::validation(e.body_text()))?;
    let query = validate_required("search_query", params.search_query.as_deref())?;

    let client = &state.shared.movies;
    let results = client.search(query).await?;

    let movies = results
        .into_iter()
        .map(|m| Movie::from_tmdb(m, client.image_base_url()))
        .collect();

    Ok(Json(movies))
}
