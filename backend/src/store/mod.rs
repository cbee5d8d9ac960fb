use async_trait::async_trait;
use thiserror::Error;

use crate::models::news::NewsRecord;

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("news {0} not found")]
    NotFound(i32),
    #[error("news {0} already exists")]
    Conflict(i32),
    #[error("record has no number")]
    Unnumbered,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence seam for news records.
///
/// Number assignment on `save` and conflict detection are the store's job;
/// callers never pick numbers for new records.
#[async_trait]
pub trait NewsStore: Send + Sync {
    /// Persists a record. A record without a number gets the next free one;
    /// a record whose number is already taken fails with `Conflict`.
    async fn save(&self, record: NewsRecord) -> StoreResult<NewsRecord>;
    async fn find_by_number(&self, number: i32) -> StoreResult<Option<NewsRecord>>;
    /// Returns `true` when a record was actually removed.
    async fn delete_by_number(&self, number: i32) -> StoreResult<bool>;
    /// Overwrites the record carrying the same number, `NotFound` if absent.
    async fn update(&self, record: NewsRecord) -> StoreResult<NewsRecord>;
    async fn find_all(&self) -> StoreResult<Vec<NewsRecord>>;
    async fn count(&self) -> StoreResult<usize>;
}
