use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use crate::models::news::NewsView;
use crate::models::page::Page;
use crate::utils::config::PagePolicy;

#[derive(Clone, Debug)]
pub struct CacheEntry<T> {
    pub value: T,
    pub cached_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            cached_at: Utc::now(),
        }
    }

    pub fn age(&self) -> Duration {
        Utc::now() - self.cached_at
    }
}

/// A named cache region that is only ever evicted as a whole.
///
/// Every flush bumps `generation`. Writers of computed values pass the
/// generation they observed before computing; the value is dropped if a
/// flush happened in between, so a flush is never undone by a slow reader.
#[derive(Debug)]
pub struct CacheRegion<K, V>
where
    K: Eq + Hash,
{
    name: &'static str,
    generation: AtomicU64,
    entries: DashMap<K, CacheEntry<V>>,
}

impl<K, V> CacheRegion<K, V>
where
    K: Eq + Hash + Copy + std::fmt::Debug,
    V: Clone,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            generation: AtomicU64::new(0),
            entries: DashMap::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let entry = self.entries.get(key)?;
        tracing::debug!(
            region = self.name,
            key = ?key,
            age_ms = entry.age().num_milliseconds(),
            "cache hit"
        );
        Some(entry.value.clone())
    }

    /// Stores `value` unless the region was flushed since `generation` was read.
    pub fn insert_if_current(&self, generation: u64, key: K, value: V) -> bool {
        // Holding the shard lock orders this check against `flush`.
        let slot = self.entries.entry(key);
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(region = self.name, key = ?key, "discarding value computed before flush");
            return false;
        }
        slot.insert(CacheEntry::new(value));
        true
    }

    pub fn flush(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.entries.clear();
        tracing::debug!(region = self.name, "cache region flushed");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read-through cache used by the news service.
#[derive(Debug)]
pub struct NewsCache {
    pub by_id: CacheRegion<i32, NewsView>,
    pub by_page: CacheRegion<i32, Page<NewsView>>,
    page_policy: PagePolicy,
}

impl NewsCache {
    pub fn new(page_policy: PagePolicy) -> Self {
        Self {
            by_id: CacheRegion::new("id"),
            by_page: CacheRegion::new("page"),
            page_policy,
        }
    }

    /// Full flush after any create, delete or update.
    pub fn evict_after_write(&self) {
        self.by_id.flush();
        if self.page_policy == PagePolicy::EvictOnWrite {
            self.by_page.flush();
        }
    }
}
