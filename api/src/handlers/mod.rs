//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod movies;

pub use movies::{
    create_movie, delete_movie, get_movie, list_movies, search_movies, update_movie,
};
