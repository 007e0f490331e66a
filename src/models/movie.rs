use serde::Serialize;

use crate::clients::movies::TmdbMovie;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub title: String,
    pub overview: String,
    pub average_votes: f64,
    pub total_votes: i64,
    pub image_url: Option<String>,
    pub popularity: f64,
    pub released_on: Option<String>,
}

impl Movie {
    #[must_use]
    pub fn from_tmdb(movie: TmdbMovie, image_base_url: &str) -> Self {
        let image_base_url = image_base_url.trim_end_matches('/');

        Self {
            title: movie.title,
            overview: movie.overview,
            average_votes: movie.vote_average,
            total_votes: movie.vote_count,
            image_url: movie
                .poster_path
                .map(|path| format!("{image_base_url}/{}", path.trim_start_matches('/'))),
            popularity: movie.popularity,
            released_on: movie.release_date,
        }
    }
}
