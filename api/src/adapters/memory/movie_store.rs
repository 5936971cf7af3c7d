//! In-memory adapter for DocumentStore

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::entities::{Movie, MovieId};
use crate::domain::ports::{DocumentStore, MovieFilter};
use crate::error::StoreError;

/// In-memory implementation of DocumentStore
///
/// Documents are kept in insertion order and duplicate titles are allowed,
/// matching the behavior of the external document store this adapter
/// stands in for. Cloning shares the underlying collection.
#[derive(Clone)]
pub struct InMemoryMovieStore {
    database: String,
    documents: Arc<RwLock<Vec<Movie>>>,
}

impl InMemoryMovieStore {
    pub fn new(database: &str) -> Self {
        Self {
            database: database.to_string(),
            documents: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Movie>>, StoreError> {
        self.documents
            .read()
            .map_err(|_| StoreError::Backend(format!("{}: document lock poisoned", self.database)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Movie>>, StoreError> {
        self.documents
            .write()
            .map_err(|_| StoreError::Backend(format!("{}: document lock poisoned", self.database)))
    }
}

#[async_trait]
impl DocumentStore for InMemoryMovieStore {
    async fn find(&self, filter: &MovieFilter) -> Result<Vec<Movie>, StoreError> {
        let documents = self.read()?;
        Ok(documents
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect())
    }

    async fn insert_one(&self, mut movie: Movie) -> Result<Movie, StoreError> {
        movie.id.get_or_insert_with(MovieId::new);
        let mut documents = self.write()?;
        documents.push(movie.clone());
        tracing::debug!(database = %self.database, title = %movie.title, "inserted document");
        Ok(movie)
    }

    async fn insert_many(&self, movies: Vec<Movie>) -> Result<Vec<Movie>, StoreError> {
        let mut stored = Vec::with_capacity(movies.len());
        let mut documents = self.write()?;
        for mut movie in movies {
            movie.id.get_or_insert_with(MovieId::new);
            documents.push(movie.clone());
            stored.push(movie);
        }
        tracing::debug!(database = %self.database, count = stored.len(), "inserted documents");
        Ok(stored)
    }

    async fn replace_one(&self, filter: &MovieFilter, movie: Movie) -> Result<u64, StoreError> {
        let mut documents = self.write()?;
        match documents.iter().position(|m| filter.matches(m)) {
            Some(index) => {
                // Document identity survives replacement.
                let id = documents[index].id;
                documents[index] = movie;
                documents[index].id = id;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, filter: &MovieFilter) -> Result<u64, StoreError> {
        let mut documents = self.write()?;
        match documents.iter().position(|m| filter.matches(m)) {
            Some(index) => {
                let removed = documents.remove(index);
                tracing::debug!(database = %self.database, title = %removed.title, "deleted document");
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_movie_titled;

    fn make_store() -> InMemoryMovieStore {
        InMemoryMovieStore::new("movies-test")
    }

    #[tokio::test]
    async fn insert_assigns_an_id() {
        let store = make_store();
        let stored = store.insert_one(test_movie_titled("Alien")).await.unwrap();
        assert!(stored.id.is_some());
    }

    #[tokio::test]
    async fn find_all_returns_documents_in_insertion_order() {
        let store = make_store();
        store.insert_one(test_movie_titled("Alien")).await.unwrap();
        store
            .insert_one(test_movie_titled("Blade Runner"))
            .await
            .unwrap();
        store.insert_one(test_movie_titled("Casino")).await.unwrap();

        let all = store.find(&MovieFilter::All).await.unwrap();
        let titles: Vec<&str> = all.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Alien", "Blade Runner", "Casino"]);
    }

    #[tokio::test]
    async fn duplicate_titles_are_allowed() {
        let store = make_store();
        store.insert_one(test_movie_titled("Alien")).await.unwrap();
        store.insert_one(test_movie_titled("Alien")).await.unwrap();

        let matches = store
            .find(&MovieFilter::TitleEquals("Alien".to_string()))
            .await
            .unwrap();
        assert_eq!(matches.len(), 2);
    }

    #[tokio::test]
    async fn insert_many_preserves_order_and_assigns_ids() {
        let store = make_store();
        let stored = store
            .insert_many(vec![
                test_movie_titled("Alien"),
                test_movie_titled("Blade Runner"),
            ])
            .await
            .unwrap();

        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|m| m.id.is_some()));

        let all = store.find(&MovieFilter::All).await.unwrap();
        assert_eq!(all[0].title, "Alien");
        assert_eq!(all[1].title, "Blade Runner");
    }

    #[tokio::test]
    async fn replace_keeps_document_identity() {
        let store = make_store();
        let stored = store.insert_one(test_movie_titled("Alien")).await.unwrap();

        let mut replacement = test_movie_titled("Aliens");
        replacement.id = None;
        let matched = store
            .replace_one(&MovieFilter::TitleEquals("Alien".to_string()), replacement)
            .await
            .unwrap();
        assert_eq!(matched, 1);

        let all = store.find(&MovieFilter::All).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Aliens");
        assert_eq!(all[0].id, stored.id);
    }

    #[tokio::test]
    async fn replace_miss_reports_zero_matches() {
        let store = make_store();
        let matched = store
            .replace_one(
                &MovieFilter::TitleEquals("Alien".to_string()),
                test_movie_titled("Aliens"),
            )
            .await
            .unwrap();
        assert_eq!(matched, 0);
        assert!(store.find(&MovieFilter::All).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_only_the_first_match() {
        let store = make_store();
        store.insert_one(test_movie_titled("Alien")).await.unwrap();
        store.insert_one(test_movie_titled("Alien")).await.unwrap();

        let deleted = store
            .delete_one(&MovieFilter::TitleEquals("Alien".to_string()))
            .await
            .unwrap();
        assert_eq!(deleted, 1);

        let remaining = store.find(&MovieFilter::All).await.unwrap();
        assert_eq!(remaining.len(), 1);
    }

    #[tokio::test]
    async fn delete_miss_reports_zero() {
        let store = make_store();
        let deleted = store
            .delete_one(&MovieFilter::TitleEquals("Alien".to_string()))
            .await
            .unwrap();
        assert_eq!(deleted, 0);
    }

    #[tokio::test]
    async fn find_by_id_returns_the_exact_document() {
        let store = make_store();
        store.insert_one(test_movie_titled("Alien")).await.unwrap();
        let stored = store
            .insert_one(test_movie_titled("Blade Runner"))
            .await
            .unwrap();

        let found = store
            .find(&MovieFilter::Id(stored.id.unwrap()))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Blade Runner");
    }
}
