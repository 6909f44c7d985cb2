use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use board_api::{AppStateInner, app};
use board_db::{MemoryStore, MessageStore};
use board_types::Message;

const INDEX: &str = "<!doctype html><title>board</title>";

fn frontend_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("board-frontend-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), INDEX).unwrap();
    dir
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn serves_index_at_root_and_keeps_api_routes() {
    let dir = frontend_dir("root");
    let store = MemoryStore::new();
    store.save(Message::new("hi")).unwrap();
    let app = app(AppStateInner::new(store), Some(&dir));

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX.as_bytes());

    let (status, body) = get(&app, "/api/messages").await;
    assert_eq!(status, StatusCode::OK);
    let messages: Vec<Message> = serde_json::from_slice(&body).unwrap();
    assert_eq!(messages, vec![Message { id: Some(1), content: Some("hi".into()) }]);

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn unknown_path_is_not_found_without_frontend() {
    let app = app(AppStateInner::new(MemoryStore::new()), None);

    let (status, _) = get(&app, "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app, "/api/messages").await;
    assert_eq!(status, StatusCode::OK);
}
