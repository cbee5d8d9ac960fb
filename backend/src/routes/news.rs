use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::{
    handlers::news::{
        create_news, delete_news, find_all, find_by_number, get_author, get_text, update_news,
    },
    utils::state::AppState,
};

pub fn news_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(create_news).patch(update_news))
        .route("/find-all", get(find_all))
        .route("/{id}", delete(delete_news).patch(find_by_number))
        .route("/{id}/text", get(get_text))
        .route("/{id}/author", get(get_author))
}
