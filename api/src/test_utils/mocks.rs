//! Mock implementations of port traits

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::adapters::InMemoryMovieStore;
use crate::domain::entities::Movie;
use crate::domain::ports::{DocumentStore, MovieFilter};
use crate::error::StoreError;

/// A document store that counts every call it receives
///
/// Wraps an in-memory store so data operations behave normally; tests use
/// the counter to prove that an operation never reached the store.
pub struct RecordingStore {
    inner: InMemoryMovieStore,
    calls: AtomicUsize,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryMovieStore::new("movies-recording"),
            calls: AtomicUsize::new(0),
        }
    }

    /// Total number of store operations issued so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for RecordingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn find(&self, filter: &MovieFilter) -> Result<Vec<Movie>, StoreError> {
        self.record();
        self.inner.find(filter).await
    }

    async fn insert_one(&self, movie: Movie) -> Result<Movie, StoreError> {
        self.record();
        self.inner.insert_one(movie).await
    }

    async fn insert_many(&self, movies: Vec<Movie>) -> Result<Vec<Movie>, StoreError> {
        self.record();
        self.inner.insert_many(movies).await
    }

    async fn replace_one(&self, filter: &MovieFilter, movie: Movie) -> Result<u64, StoreError> {
        self.record();
        self.inner.replace_one(filter, movie).await
    }

    async fn delete_one(&self, filter: &MovieFilter) -> Result<u64, StoreError> {
        self.record();
        self.inner.delete_one(filter).await
    }
}
