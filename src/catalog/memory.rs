use std::collections::BTreeMap;

use crate::{catalog::Catalog, error::AppResult, models::Movie};

/// HashMap-style catalog held entirely in memory.
///
/// Used by integration tests and local demos where spinning up MySQL is
/// overkill. A `BTreeMap` keeps iteration in id order, which satisfies the
/// stable-ordering requirement of [`Catalog`].
#[derive(Default)]
pub struct InMemoryCatalog {
    movies: BTreeMap<i64, Movie>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a movie, keyed by its id.
    pub fn insert(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl FromIterator<Movie> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for movie in iter {
            catalog.insert(movie);
        }
        catalog
    }
}

#[async_trait::async_trait]
impl Catalog for InMemoryCatalog {
    async fn fetch_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        Ok(self.movies.get(&id).cloned())
    }

    async fn fetch_all_except(&self, exclude: &[i64]) -> AppResult<Vec<Movie>> {
        Ok(self
            .movies
            .values()
            .filter(|m| !exclude.contains(&m.id))
            .cloned()
            .collect())
    }
}
