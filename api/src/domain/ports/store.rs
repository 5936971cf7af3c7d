//! Document store port
//!
//! The narrow boundary between the catalog and whatever holds its
//! documents. Filters are plain data, mirroring a document store's query
//! documents, so adapters decide how to execute them.

use async_trait::async_trait;

use crate::domain::entities::{Movie, MovieId};
use crate::error::StoreError;

/// Query filter over movie documents
///
/// Title matching is case-sensitive in both forms.
#[derive(Debug, Clone, PartialEq)]
pub enum MovieFilter {
    /// Match every document.
    All,
    /// Match the document with this store-assigned identity.
    Id(MovieId),
    /// Match documents whose title equals the value exactly.
    TitleEquals(String),
    /// Match documents whose title contains the value as a substring.
    TitleContains(String),
}

impl MovieFilter {
    /// Evaluate the filter against a single document.
    pub fn matches(&self, movie: &Movie) -> bool {
        match self {
            MovieFilter::All => true,
            MovieFilter::Id(id) => movie.id.as_ref() == Some(id),
            MovieFilter::TitleEquals(title) => movie.title == *title,
            MovieFilter::TitleContains(fragment) => movie.title.contains(fragment.as_str()),
        }
    }
}

/// Primitive operations the catalog needs from a document store
///
/// Implementations are provided by adapters. Documents are returned in
/// store order; `replace_one` and `delete_one` act on the first match only
/// and report how many documents were affected.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Return every document matching the filter.
    async fn find(&self, filter: &MovieFilter) -> Result<Vec<Movie>, StoreError>;

    /// Insert a single document, assigning it an identity.
    /// Returns the stored document.
    async fn insert_one(&self, movie: Movie) -> Result<Movie, StoreError>;

    /// Insert a batch of documents in order.
    async fn insert_many(&self, movies: Vec<Movie>) -> Result<Vec<Movie>, StoreError>;

    /// Replace the first document matching the filter, keeping its
    /// identity. Returns the number of documents matched (0 or 1).
    async fn replace_one(&self, filter: &MovieFilter, movie: Movie) -> Result<u64, StoreError>;

    /// Delete the first document matching the filter.
    /// Returns the number of documents deleted (0 or 1).
    async fn delete_one(&self, filter: &MovieFilter) -> Result<u64, StoreError>;
}
