//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults, and a
//! scoped catalog fixture giving each test its own logical database.

use std::sync::Arc;

use uuid::Uuid;

use crate::adapters::InMemoryMovieStore;
use crate::app::MovieService;
use crate::domain::entities::Movie;
use crate::domain::ports::DocumentStore;

/// Create a valid test movie with default values
pub fn test_movie() -> Movie {
    Movie {
        id: None,
        title: "Test Movie".to_string(),
        director: "Test Director".to_string(),
        year_released: 2022,
        genre: "Action".to_string(),
        duration_minutes: 120,
        rating: 7.5,
    }
}

/// Create a valid test movie with a specific title
pub fn test_movie_titled(title: &str) -> Movie {
    Movie {
        title: title.to_string(),
        ..test_movie()
    }
}

/// A catalog scoped to one test
///
/// Owns a store under a fresh database name so concurrent tests never
/// share state. Dropping the fixture drops the store and with it every
/// document it held; teardown needs no explicit step.
pub struct TestCatalog {
    pub database: String,
    pub store: Arc<InMemoryMovieStore>,
    pub movies: MovieService<InMemoryMovieStore>,
}

impl TestCatalog {
    pub fn new() -> Self {
        let database = format!("movies-test-{}", Uuid::new_v4());
        let store = Arc::new(InMemoryMovieStore::new(&database));
        let movies = MovieService::new(store.clone());
        Self {
            database,
            store,
            movies,
        }
    }

    /// Seed the underlying store directly, bypassing validation.
    pub async fn seed(&self, movies: Vec<Movie>) -> Vec<Movie> {
        self.store.insert_many(movies).await.unwrap()
    }
}
