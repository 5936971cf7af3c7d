//! Movie service
//!
//! The public-facing operation set. Validates records and arguments before
//! anything reaches the repository; an invalid record never causes a store
//! call.

use std::sync::Arc;

use crate::app::MovieRepository;
use crate::domain::entities::Movie;
use crate::domain::ports::DocumentStore;
use crate::error::DomainError;

pub struct MovieService<S: DocumentStore> {
    movies: MovieRepository<S>,
}

impl<S: DocumentStore> MovieService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            movies: MovieRepository::new(store),
        }
    }

    /// Add a record to the catalog.
    pub async fn add(&self, movie: Movie) -> Result<(), DomainError> {
        if !movie.is_valid() {
            return Err(DomainError::Validation("Movie is not valid.".to_string()));
        }
        self.movies.add(movie).await?;
        Ok(())
    }

    /// Delete the record stored under the given title.
    pub async fn delete(&self, title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::InvalidArgument(
                "Title must not be empty or whitespace.".to_string(),
            ));
        }
        self.movies.delete(title).await
    }

    /// Every record in the catalog; empty when there are none.
    pub async fn get_all(&self) -> Result<Vec<Movie>, DomainError> {
        self.movies.get_all().await
    }

    /// Exact-title lookup. A miss is `Ok(None)`, never an error.
    pub async fn get_by_title(&self, title: &str) -> Result<Option<Movie>, DomainError> {
        self.movies.get_by_title(title).await
    }

    /// Substring search over titles. Zero matches is `NotFound`.
    pub async fn search_by_title(&self, fragment: &str) -> Result<Vec<Movie>, DomainError> {
        self.movies.search_by_title(fragment).await
    }

    /// Replace the stored record with the given field values.
    pub async fn update(&self, movie: Movie) -> Result<(), DomainError> {
        if !movie.is_valid() {
            return Err(DomainError::Validation("Movie is not valid.".to_string()));
        }
        self.movies.update(movie).await
    }
}
