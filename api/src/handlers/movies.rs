//! Movie handlers
//!
//! Endpoints for the catalog's CRUD operations. Records cross the wire
//! without their internal document id.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Movie;
use crate::error::AppError;
use crate::AppState;

/// Request body for creating or replacing a movie
#[derive(Debug, Deserialize)]
pub struct MovieRequest {
    pub title: String,
    pub director: String,
    pub year_released: i32,
    pub genre: String,
    pub duration_minutes: i32,
    pub rating: f64,
}

impl From<MovieRequest> for Movie {
    fn from(request: MovieRequest) -> Self {
        Movie {
            id: None,
            title: request.title,
            director: request.director,
            year_released: request.year_released,
            genre: request.genre,
            duration_minutes: request.duration_minutes,
            rating: request.rating,
        }
    }
}

/// Response body for a movie record
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub title: String,
    pub director: String,
    pub year_released: i32,
    pub genre: String,
    pub duration_minutes: i32,
    pub rating: f64,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            title: movie.title,
            director: movie.director,
            year_released: movie.year_released,
            genre: movie.genre,
            duration_minutes: movie.duration_minutes,
            rating: movie.rating,
        }
    }
}

/// Query parameters for title search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
}

/// POST /movies
///
/// Add a record to the catalog.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(request): Json<MovieRequest>,
) -> Result<StatusCode, AppError> {
    state.movies.add(request.into()).await?;
    Ok(StatusCode::CREATED)
}

/// GET /movies
///
/// List every record in the catalog.
pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieResponse>>, AppError> {
    let movies = state.movies.get_all().await?;
    Ok(Json(movies.into_iter().map(Into::into).collect()))
}

/// GET /movies/search?title=fragment
///
/// Find records whose title contains the fragment.
pub async fn search_movies(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<MovieResponse>>, AppError> {
    let fragment = query
        .title
        .ok_or_else(|| AppError::BadRequest("Missing 'title' query parameter".to_string()))?;

    let movies = state.movies.search_by_title(&fragment).await?;
    Ok(Json(movies.into_iter().map(Into::into).collect()))
}

/// GET /movies/:title
///
/// Exact-title lookup. The domain treats a miss as an empty result; at the
/// HTTP boundary that becomes a 404.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<MovieResponse>, AppError> {
    let movie = state
        .movies
        .get_by_title(&title)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Movie '{}' not found", title)))?;

    Ok(Json(movie.into()))
}

/// PUT /movies/:title
///
/// Replace the record stored under `:title` with the request body. A body
/// carrying a different title renames the stored record.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Json(request): Json<MovieRequest>,
) -> Result<StatusCode, AppError> {
    let mut movie = Movie::from(request);
    if movie.title != title {
        // Carry the stored document's identity over so the rename replaces
        // the original document instead of matching nothing.
        if let Some(existing) = state.movies.get_by_title(&title).await? {
            movie.id = existing.id;
        }
    }

    state.movies.update(movie).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movies/:title
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<StatusCode, AppError> {
    state.movies.delete(&title).await?;
    Ok(StatusCode::NO_CONTENT)
}
