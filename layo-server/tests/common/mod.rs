//! Shared helpers for the HTTP integration tests
//!
//! Each test gets its own in-memory store and temporary uploads directory,
//! and drives the router in-process with `oneshot`.

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes};
use http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use layo_server::{Config, ServerState, build_app};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const SELLER: &str = "admin";
pub const PASSWORD: &str = "Layo@1ly";

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
    pub uploads: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn spawn_app() -> TestApp {
    let uploads = tempfile::tempdir().unwrap();
    let config = Config::for_testing(uploads.path());
    let state = ServerState::initialize(&config).await.unwrap();
    TestApp {
        app: build_app(state.clone()),
        state,
        uploads,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn list_products(&self) -> Vec<Value> {
        let res = self.get("/api/products").await;
        assert_eq!(res.status, StatusCode::OK);
        match res.json() {
            Value::Array(items) => items,
            other => panic!("expected array, got {other}"),
        }
    }

    /// Names of the files currently in the uploads directory
    pub fn uploaded_files(&self) -> Vec<String> {
        std::fs::read_dir(self.uploads.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Minimal `multipart/form-data` body builder
pub struct MultipartForm {
    boundary: String,
    body: Vec<u8>,
}

impl Default for MultipartForm {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartForm {
    pub fn new() -> Self {
        Self {
            boundary: "layo-test-boundary-7MA4YWxkTrZu0gW".into(),
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn credentials(self, username: &str, password: &str) -> Self {
        self.text("username", username).text("password", password)
    }

    /// The fields every valid product needs
    pub fn product_fields(self, name: &str) -> Self {
        self.text("name", name)
            .text("price", "19.99")
            .text("description", "Hand made")
            .text("category", "crafts")
    }

    pub fn into_request(mut self, uri: &str) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", self.boundary),
            )
            .body(Body::from(self.body))
            .unwrap()
    }
}

pub fn product_json(name: &str) -> Value {
    serde_json::json!({
        "username": SELLER,
        "password": PASSWORD,
        "name": name,
        "price": 25,
        "description": "Wooden bowl",
        "category": "kitchen",
    })
}
