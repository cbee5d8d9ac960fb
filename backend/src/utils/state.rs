use std::sync::Arc;

use crate::models::cache::NewsCache;
use crate::services::news::NewsService;
use crate::store::memory::InMemoryNewsStore;
use crate::store::NewsStore;
use crate::utils::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub news: Arc<NewsService>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn NewsStore>) -> Self {
        let cache = NewsCache::new(config.page_policy);
        let news = Arc::new(NewsService::new(store, cache, config.page_size));
        AppState { config, news }
    }

    /// State backed by an in-memory store holding `config.seed_count` demo records.
    pub fn init(config: Config) -> Self {
        let store = Arc::new(InMemoryNewsStore::seeded(config.seed_count));
        Self::new(config, store)
    }
}
