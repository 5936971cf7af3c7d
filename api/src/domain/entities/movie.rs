//! Movie domain entity
//!
//! The catalog record and its field constraints. The title is the external
//! identifier used for lookup, update, and delete.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Earliest accepted release year.
pub const MIN_YEAR_RELEASED: i32 = 1900;

/// Highest accepted rating (scale is 0.0 to 10.0).
pub const MAX_RATING: f64 = 10.0;

/// Store-assigned document identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieId(pub Uuid);

impl MovieId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog record for a single movie
///
/// The `id` is the store's internal document identity. It is `None` on
/// records built by callers and assigned when the document is inserted;
/// it never participates in validation and is not exposed over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MovieId>,
    pub title: String,
    pub director: String,
    pub year_released: i32,
    pub genre: String,
    pub duration_minutes: i32,
    pub rating: f64,
}

impl Movie {
    /// Check whether every field constraint holds.
    ///
    /// Pure predicate: required text fields non-empty, `year_released` in
    /// `[1900, current_year + 1]`, `duration_minutes` positive, `rating` in
    /// `[0.0, 10.0]`.
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty()
            && !self.director.is_empty()
            && !self.genre.is_empty()
            && (MIN_YEAR_RELEASED..=latest_allowed_year()).contains(&self.year_released)
            && self.duration_minutes > 0
            && (0.0..=MAX_RATING).contains(&self.rating)
    }
}

/// Upper bound for `year_released`: next year is allowed for upcoming titles.
fn latest_allowed_year() -> i32 {
    Utc::now().year() + 1
}
