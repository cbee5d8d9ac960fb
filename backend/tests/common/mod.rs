use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::Router;
use news_backend::routes::build_router;
use news_backend::store::memory::InMemoryNewsStore;
use news_backend::utils::config::{Config, ErrorMode};
use news_backend::utils::state::AppState;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryNewsStore>,
}

pub fn app_with_mode(error_mode: ErrorMode) -> TestApp {
    let store = Arc::new(InMemoryNewsStore::seeded(1000));
    let config = Config {
        error_mode,
        ..Config::default()
    };
    let state = AppState::new(config, store.clone());
    TestApp {
        router: build_router(state),
        store,
    }
}

pub fn app() -> TestApp {
    app_with_mode(ErrorMode::Observed)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub async fn read_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec()
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&read_bytes(response).await).expect("json")
}

pub async fn read_text(response: axum::response::Response) -> String {
    String::from_utf8(read_bytes(response).await).expect("utf8")
}
