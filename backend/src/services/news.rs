//! News business logic: CRUD on top of a [`NewsStore`] plus read-through
//! caching of single lookups and page listings.
use std::sync::Arc;

use tracing::{debug, info};

use crate::models::cache::NewsCache;
use crate::models::error::ServiceError;
use crate::models::news::NewsView;
use crate::models::page::Page;
use crate::store::NewsStore;
use crate::utils::news_mapper::{to_record, to_view, to_views};

pub type ServiceResult<T> = Result<T, ServiceError>;

pub struct NewsService {
    store: Arc<dyn NewsStore>,
    cache: NewsCache,
    page_size: i32,
}

impl NewsService {
    pub fn new(store: Arc<dyn NewsStore>, cache: NewsCache, page_size: i32) -> Self {
        Self {
            store,
            cache,
            page_size: page_size.max(1),
        }
    }

    pub fn cache(&self) -> &NewsCache {
        &self.cache
    }

    pub fn page_size(&self) -> i32 {
        self.page_size
    }

    pub async fn record_count(&self) -> ServiceResult<usize> {
        Ok(self.store.count().await?)
    }

    pub async fn create(&self, view: NewsView) -> ServiceResult<NewsView> {
        let saved = self.store.save(to_record(view)).await?;
        info!(number = ?saved.number, "news created");
        self.cache.evict_after_write();
        Ok(to_view(saved))
    }

    pub async fn delete(&self, number: i32) -> ServiceResult<bool> {
        let removed = self.store.delete_by_number(number).await?;
        info!(number, removed, "news delete");
        self.cache.evict_after_write();
        Ok(removed)
    }

    pub async fn find_by_id(&self, number: i32) -> ServiceResult<NewsView> {
        let region = &self.cache.by_id;
        if let Some(cached) = region.get(&number) {
            return Ok(cached);
        }
        let generation = region.generation();
        debug!(region = region.name(), number, "cache miss");
        let view = self
            .store
            .find_by_number(number)
            .await?
            .map(to_view)
            .ok_or(ServiceError::NotFound(number))?;
        region.insert_if_current(generation, number, view.clone());
        Ok(view)
    }

    pub async fn update(&self, view: NewsView) -> ServiceResult<NewsView> {
        if view.number.is_none() {
            return Err(ServiceError::MissingNumber);
        }
        let updated = self.store.update(to_record(view)).await?;
        info!(number = ?updated.number, "news updated");
        self.cache.evict_after_write();
        Ok(to_view(updated))
    }

    pub async fn get_text(&self, number: i32) -> ServiceResult<String> {
        self.store
            .find_by_number(number)
            .await?
            .map(|record| record.text)
            .ok_or(ServiceError::NotFound(number))
    }

    pub async fn get_author(&self, number: i32) -> ServiceResult<String> {
        self.store
            .find_by_number(number)
            .await?
            .map(|record| record.author)
            .ok_or(ServiceError::NotFound(number))
    }

    pub async fn list_page(&self, page_number: i32) -> ServiceResult<Page<NewsView>> {
        let region = &self.cache.by_page;
        if let Some(cached) = region.get(&page_number) {
            return Ok(cached);
        }
        let generation = region.generation();
        debug!(region = region.name(), page_number, "cache miss");
        let all = to_views(self.store.find_all().await?);
        let page = paginate(all, page_number, self.page_size);
        region.insert_if_current(generation, page_number, page.clone());
        Ok(page)
    }
}

/// Slices `items` into the 1-based page `page_number`.
///
/// `count_pages` is `total / page_size` rounded down, so a trailing partial
/// page is not counted. Pages below 1 are empty.
pub fn paginate(mut items: Vec<NewsView>, page_number: i32, page_size: i32) -> Page<NewsView> {
    items.sort_by_key(|view| view.number);
    let page_len = page_size.max(1) as usize;
    let count_pages = i32::try_from(items.len() / page_len).unwrap_or(i32::MAX);

    let content: Vec<NewsView> = if page_number <= 0 {
        Vec::new()
    } else {
        let skip = (page_number as usize - 1).saturating_mul(page_len);
        items.into_iter().skip(skip).take(page_len).collect()
    };

    Page {
        size: content.len() as i32,
        content,
        count_pages,
        current_page: page_number,
        max_page_size: page_size,
    }
}
