//! In-memory news store.
//!
//! Records live in a `BTreeMap` keyed by number behind a `tokio::sync::RwLock`,
//! so reads run concurrently and writes are serialized. Nothing survives a
//! restart.
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{NewsStore, StoreError, StoreResult};
use crate::models::news::NewsRecord;

#[derive(Debug)]
struct Records {
    next_number: i32,
    items: BTreeMap<i32, NewsRecord>,
}

#[derive(Debug)]
pub struct InMemoryNewsStore {
    records: RwLock<Records>,
}

impl Default for InMemoryNewsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryNewsStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Records {
                next_number: 1,
                items: BTreeMap::new(),
            }),
        }
    }

    /// Store pre-filled with `count` demo records numbered `1..=count`.
    pub fn seeded(count: i32) -> Self {
        let mut items = BTreeMap::new();
        for number in 1..=count.max(0) {
            items.insert(
                number,
                NewsRecord {
                    number: Some(number),
                    title: format!("News #{number}"),
                    author: format!("Author #{number}"),
                    text: format!("Text of news #{number}"),
                },
            );
        }
        Self {
            records: RwLock::new(Records {
                next_number: count.max(0).saturating_add(1),
                items,
            }),
        }
    }
}

#[async_trait]
impl NewsStore for InMemoryNewsStore {
    async fn save(&self, mut record: NewsRecord) -> StoreResult<NewsRecord> {
        let mut records = self.records.write().await;
        let number = match record.number {
            Some(number) => {
                if records.items.contains_key(&number) {
                    return Err(StoreError::Conflict(number));
                }
                number
            }
            None => {
                // Explicit numbers may have claimed the counter value already.
                let mut candidate = records.next_number;
                while records.items.contains_key(&candidate) {
                    candidate = candidate.checked_add(1).ok_or_else(|| {
                        StoreError::Unavailable("news number space exhausted".to_string())
                    })?;
                }
                candidate
            }
        };
        if number >= records.next_number {
            records.next_number = number.saturating_add(1);
        }
        record.number = Some(number);
        records.items.insert(number, record.clone());
        Ok(record)
    }

    async fn find_by_number(&self, number: i32) -> StoreResult<Option<NewsRecord>> {
        let records = self.records.read().await;
        Ok(records.items.get(&number).cloned())
    }

    async fn delete_by_number(&self, number: i32) -> StoreResult<bool> {
        let mut records = self.records.write().await;
        Ok(records.items.remove(&number).is_some())
    }

    async fn update(&self, record: NewsRecord) -> StoreResult<NewsRecord> {
        let number = record.number.ok_or(StoreError::Unnumbered)?;
        let mut records = self.records.write().await;
        match records.items.get_mut(&number) {
            Some(existing) => {
                *existing = record.clone();
                Ok(record)
            }
            None => Err(StoreError::NotFound(number)),
        }
    }

    async fn find_all(&self) -> StoreResult<Vec<NewsRecord>> {
        let records = self.records.read().await;
        Ok(records.items.values().cloned().collect())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.records.read().await.items.len())
    }
}
