//! Catalog access layer.
//!
//! The recommendation core never talks to storage directly; it reads movies
//! through this trait, injected at startup. Swapping the backing store (or
//! mocking it in tests) never touches the scoring code.

use crate::{error::AppResult, models::Movie};

pub mod memory;
pub mod sql;

pub use memory::InMemoryCatalog;
pub use sql::SqlCatalog;

/// Read contract over the movie catalog.
///
/// Implementations must return movies in a stable order from
/// `fetch_all_except`: ranking breaks score ties by first-seen candidate
/// order, so an unstable pool order would make results nondeterministic.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// Look up a single movie by id. `Ok(None)` means the id does not exist;
    /// an `Err` means the catalog itself could not be reached.
    async fn fetch_by_id(&self, id: i64) -> AppResult<Option<Movie>>;

    /// Fetch every movie whose id is not in `exclude`, in stable id order.
    async fn fetch_all_except(&self, exclude: &[i64]) -> AppResult<Vec<Movie>>;

    /// Fetch the whole catalog, in stable id order.
    async fn fetch_all(&self) -> AppResult<Vec<Movie>> {
        self.fetch_all_except(&[]).await
    }
}
