//! Serving files under /uploads

mod common;

use common::spawn_app;
use http::StatusCode;

#[tokio::test]
async fn serves_existing_file_with_guessed_type() {
    let app = spawn_app().await;
    std::fs::write(app.uploads.path().join("1700000000000.mp4"), b"video-bytes").unwrap();

    let res = app.get("/uploads/1700000000000.mp4").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.as_ref(), b"video-bytes");
    assert_eq!(res.headers[http::header::CONTENT_TYPE], "video/mp4");
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let app = spawn_app().await;
    let res = app.get("/uploads/nothing-here.png").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json()["code"], 3);
}

#[tokio::test]
async fn traversal_is_refused() {
    let app = spawn_app().await;
    let res = app.get("/uploads/..%2F..%2Fetc%2Fpasswd").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = app.get("/uploads/a%2F..%2F..%2Fsecret").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = spawn_app().await;
    let res = app.get("/api/sellers").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}
