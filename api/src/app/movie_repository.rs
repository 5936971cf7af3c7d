//! Movie repository
//!
//! Translates catalog operations into document-store calls and maps store
//! outcomes to domain errors. Addressing is by title, except that update
//! prefers the record's document identity so a title change still replaces
//! the original document.

use std::sync::Arc;

use crate::domain::entities::Movie;
use crate::domain::ports::{DocumentStore, MovieFilter};
use crate::error::DomainError;

pub struct MovieRepository<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> MovieRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Insert one record. Duplicate titles are not checked here; the store
    /// may hold several documents with the same title.
    pub async fn add(&self, movie: Movie) -> Result<Movie, DomainError> {
        Ok(self.store.insert_one(movie).await?)
    }

    /// All records in store order. An empty catalog is an empty vec, not
    /// an error.
    pub async fn get_all(&self) -> Result<Vec<Movie>, DomainError> {
        Ok(self.store.find(&MovieFilter::All).await?)
    }

    /// First record whose title matches exactly, `None` on a miss.
    pub async fn get_by_title(&self, title: &str) -> Result<Option<Movie>, DomainError> {
        let mut matches = self
            .store
            .find(&MovieFilter::TitleEquals(title.to_string()))
            .await?;
        if matches.is_empty() {
            Ok(None)
        } else {
            Ok(Some(matches.remove(0)))
        }
    }

    /// All records whose title contains the fragment, in store order.
    /// Zero matches is an error, unlike the exact-title lookup.
    pub async fn search_by_title(&self, fragment: &str) -> Result<Vec<Movie>, DomainError> {
        let matches = self
            .store
            .find(&MovieFilter::TitleContains(fragment.to_string()))
            .await?;
        if matches.is_empty() {
            return Err(DomainError::NotFound(format!(
                "No movie title contains '{}'",
                fragment
            )));
        }
        Ok(matches)
    }

    /// Remove the record matching the title exactly.
    pub async fn delete(&self, title: &str) -> Result<(), DomainError> {
        let deleted = self
            .store
            .delete_one(&MovieFilter::TitleEquals(title.to_string()))
            .await?;
        if deleted == 0 {
            return Err(DomainError::InvalidOperation(format!(
                "No movie titled '{}' to delete",
                title
            )));
        }
        Ok(())
    }

    /// Replace the stored document with the record's field values.
    ///
    /// Addressed by the record's document identity when it has one (so a
    /// record fetched from the store can be renamed), by exact title
    /// otherwise. A miss replaces nothing and is not an error.
    pub async fn update(&self, movie: Movie) -> Result<(), DomainError> {
        let filter = match movie.id {
            Some(id) => MovieFilter::Id(id),
            None => MovieFilter::TitleEquals(movie.title.clone()),
        };
        let title = movie.title.clone();
        let matched = self.store.replace_one(&filter, movie).await?;
        if matched == 0 {
            tracing::warn!(title = %title, "update matched no document");
        }
        Ok(())
    }
}
