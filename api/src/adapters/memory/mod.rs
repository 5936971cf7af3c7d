//! Process-local document store
//!
//! Stands in for the external document database behind the `DocumentStore`
//! port. Every test group gets its own logical database by constructing a
//! fresh instance.

pub mod movie_store;

pub use movie_store::InMemoryMovieStore;
