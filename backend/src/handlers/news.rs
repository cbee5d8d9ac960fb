use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use http::StatusCode;
use serde::Deserialize;

use crate::models::{error::Error, news::NewsView, page::Page};
use crate::utils::state::AppState;

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: i32,
}

pub async fn create_news(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewsView>,
) -> Result<StatusCode, Error> {
    state
        .news
        .create(payload)
        .await
        .map_err(|e| Error::from_service(e, state.config.error_mode))?;
    Ok(StatusCode::CREATED)
}

pub async fn delete_news(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, Error> {
    let removed = state
        .news
        .delete(id)
        .await
        .map_err(|e| Error::from_service(e, state.config.error_mode))?;
    Ok(Json(removed))
}

pub async fn find_all(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageQuery>,
) -> Result<Json<Page<NewsView>>, Error> {
    let page = state
        .news
        .list_page(params.page)
        .await
        .map_err(|e| Error::from_service(e, state.config.error_mode))?;
    Ok(Json(page))
}

/// Served on `PATCH /news/{id}`; returns the (cached) record, changes nothing.
pub async fn find_by_number(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<NewsView>, Error> {
    let view = state
        .news
        .find_by_id(id)
        .await
        .map_err(|e| Error::from_service(e, state.config.error_mode))?;
    Ok(Json(view))
}

pub async fn update_news(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewsView>,
) -> Result<StatusCode, Error> {
    state
        .news
        .update(payload)
        .await
        .map_err(|e| Error::from_service(e, state.config.error_mode))?;
    Ok(StatusCode::OK)
}

pub async fn get_text(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<String, Error> {
    state
        .news
        .get_text(id)
        .await
        .map_err(|e| Error::from_service(e, state.config.error_mode))
}

pub async fn get_author(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<String, Error> {
    state
        .news
        .get_author(id)
        .await
        .map_err(|e| Error::from_service(e, state.config.error_mode))
}
