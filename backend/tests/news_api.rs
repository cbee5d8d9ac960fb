mod common;

use axum::http::StatusCode;
use common::{app, app_with_mode, empty_request, json_request, read_bytes, read_json, read_text};
use news_backend::models::news::NewsRecord;
use news_backend::store::NewsStore;
use news_backend::utils::config::ErrorMode;
use serde_json::json;
use tower::ServiceExt;

const TITLE: &str = "Test news";
const AUTHOR: &str = "Alexander";
const TEXT: &str = "This is test news";

fn test_record() -> NewsRecord {
    NewsRecord::new(TITLE, AUTHOR, TEXT)
}

#[tokio::test]
async fn create_assigns_next_number() {
    let app = app();
    let request = json_request(
        "POST",
        "/news",
        json!({ "title": TITLE, "author": AUTHOR, "text": TEXT }),
    );
    let response = app.router.clone().oneshot(request).await.expect("create");
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(read_bytes(response).await.is_empty());

    let stored = app
        .store
        .find_by_number(1001)
        .await
        .expect("find")
        .expect("stored");
    assert_eq!(stored, test_record().with_number(1001));
}

#[tokio::test]
async fn create_with_taken_number_fails() {
    let app = app();
    let request = json_request(
        "POST",
        "/news",
        json!({ "number": 1000, "title": TITLE, "author": AUTHOR, "text": TEXT }),
    );
    let response = app.router.clone().oneshot(request).await.expect("create");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert_eq!(body["message"], "news 1000 already exists");
}

#[tokio::test]
async fn delete_existing_news() {
    let app = app();
    app.store.save(test_record()).await.expect("save");

    let response = app
        .router
        .clone()
        .oneshot(empty_request("DELETE", "/news/1001"))
        .await
        .expect("delete");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!(true));
    assert!(app.store.find_by_number(1001).await.expect("find").is_none());
}

#[tokio::test]
async fn delete_missing_news_returns_false() {
    let app = app();
    let response = app
        .router
        .clone()
        .oneshot(empty_request("DELETE", "/news/2000"))
        .await
        .expect("delete");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!(false));
    assert_eq!(app.store.count().await.expect("count"), 1000);
}

#[tokio::test]
async fn text_and_author_are_plain_strings() {
    let app = app();
    app.store.save(test_record()).await.expect("save");

    let response = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/news/1001/text"))
        .await
        .expect("text");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_text(response).await, TEXT);

    let response = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/news/1001/author"))
        .await
        .expect("author");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_text(response).await, AUTHOR);
}

#[tokio::test]
async fn text_and_author_of_missing_news_fail() {
    let app = app();
    for uri in ["/news/1001/text", "/news/1001/author"] {
        let response = app
            .router
            .clone()
            .oneshot(empty_request("GET", uri))
            .await
            .expect("request");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
    }
}

#[tokio::test]
async fn find_all_returns_first_page() {
    let app = app();
    let response = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/news/find-all?page=1"))
        .await
        .expect("page");
    assert_eq!(response.status(), StatusCode::OK);
    let page = read_json(response).await;
    assert_eq!(page["countPages"], 100);
    assert_eq!(page["currentPage"], 1);
    assert_eq!(page["maxPageSize"], 10);
    assert_eq!(page["size"], 10);
    assert_eq!(page["content"][0]["number"], 1);
    assert_eq!(page["content"][9]["number"], 10);
}

#[tokio::test]
async fn find_all_requires_page_parameter() {
    let app = app();
    let response = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/news/find-all"))
        .await
        .expect("page");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn find_all_with_page_zero_is_empty() {
    let app = app();
    let response = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/news/find-all?page=0"))
        .await
        .expect("page");
    assert_eq!(response.status(), StatusCode::OK);
    let page = read_json(response).await;
    assert_eq!(page["content"], json!([]));
    assert_eq!(page["size"], 0);
    assert_eq!(page["currentPage"], 0);
}

#[tokio::test]
async fn update_overwrites_all_fields() {
    let app = app();
    let request = json_request(
        "PATCH",
        "/news",
        json!({ "number": 1, "title": TITLE, "author": AUTHOR, "text": TEXT }),
    );
    let response = app.router.clone().oneshot(request).await.expect("update");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(read_bytes(response).await.is_empty());

    let stored = app
        .store
        .find_by_number(1)
        .await
        .expect("find")
        .expect("stored");
    assert_eq!(stored, test_record().with_number(1));
}

#[tokio::test]
async fn update_of_missing_news_fails() {
    let app = app();
    for body in [
        json!({ "number": 5000, "title": TITLE, "author": AUTHOR, "text": TEXT }),
        json!({ "title": TITLE, "author": AUTHOR, "text": TEXT }),
    ] {
        let response = app
            .router
            .clone()
            .oneshot(json_request("PATCH", "/news", body))
            .await
            .expect("update");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

#[tokio::test]
async fn patch_by_id_reflects_latest_write() {
    let app = app();
    let response = app
        .router
        .clone()
        .oneshot(empty_request("PATCH", "/news/1"))
        .await
        .expect("fetch");
    assert_eq!(response.status(), StatusCode::OK);
    let view = read_json(response).await;
    assert_eq!(view["title"], "News #1");

    let update = json_request(
        "PATCH",
        "/news",
        json!({ "number": 1, "title": TITLE, "author": AUTHOR, "text": TEXT }),
    );
    let response = app.router.clone().oneshot(update).await.expect("update");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .router
        .clone()
        .oneshot(empty_request("PATCH", "/news/1"))
        .await
        .expect("fetch");
    let view = read_json(response).await;
    assert_eq!(
        view,
        json!({ "number": 1, "title": TITLE, "author": AUTHOR, "text": TEXT })
    );

    let response = app
        .router
        .clone()
        .oneshot(empty_request("PATCH", "/news/5000"))
        .await
        .expect("fetch missing");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn listing_reflects_delete() {
    let app = app();
    let first = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/news/find-all?page=100"))
        .await
        .expect("page");
    assert_eq!(read_json(first).await["size"], 10);

    let response = app
        .router
        .clone()
        .oneshot(empty_request("DELETE", "/news/1000"))
        .await
        .expect("delete");
    assert_eq!(read_json(response).await, json!(true));

    let second = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/news/find-all?page=100"))
        .await
        .expect("page");
    let page = read_json(second).await;
    assert_eq!(page["size"], 9);
    assert_eq!(page["countPages"], 99);
}

#[tokio::test]
async fn strict_mode_uses_specific_status_codes() {
    let app = app_with_mode(ErrorMode::Strict);

    let response = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/news/5000/text"))
        .await
        .expect("text");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/news",
            json!({ "number": 1, "title": TITLE, "author": AUTHOR, "text": TEXT }),
        ))
        .await
        .expect("create");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "PATCH",
            "/news",
            json!({ "title": TITLE, "author": AUTHOR, "text": TEXT }),
        ))
        .await
        .expect("update");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_check_responds() {
    let app = app();
    let response = app
        .router
        .clone()
        .oneshot(empty_request("GET", "/"))
        .await
        .expect("health");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({"message": "ok"}));
}
