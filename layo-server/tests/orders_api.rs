//! Order placement

mod common;

use common::{json_request, spawn_app};
use http::{Method, StatusCode};
use layo_server::db::repository::{OrderRepository, Repository};
use serde_json::{Value, json};

fn order_json() -> Value {
    json!({
        "customerName": "Ada",
        "phone": "+34 600 000 000",
        "pickupLocation": "Main square",
        "quantity": 2,
        "productId": "0f8fad5bd9cb469fa16570867728950e",
    })
}

#[tokio::test]
async fn place_order() {
    let app = spawn_app().await;
    let before = chrono::Utc::now();

    let res = app
        .send(json_request(Method::POST, "/api/orders", order_json()))
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.text());

    let body = res.json();
    assert_eq!(body["success"], true);
    let order = &body["order"];
    assert_eq!(order["customerName"], "Ada");
    assert_eq!(order["pickupLocation"], "Main square");
    assert_eq!(order["quantity"].as_f64(), Some(2.0));
    assert!(order["id"].as_str().is_some_and(|id| !id.is_empty()));

    let created_at: chrono::DateTime<chrono::Utc> = order["createdAt"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(created_at >= before);

    let stored = OrderRepository::new(app.state.db.clone())
        .find_all()
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].phone, "+34 600 000 000");
    assert_eq!(stored[0].id, order["id"].as_str().unwrap());
}

#[tokio::test]
async fn product_reference_is_not_checked() {
    let app = spawn_app().await;
    let mut body = order_json();
    body["productId"] = json!("no-such-product");
    let res = app
        .send(json_request(Method::POST, "/api/orders", body))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["order"]["productId"], "no-such-product");
}

#[tokio::test]
async fn quantity_accepts_numeric_string() {
    let app = spawn_app().await;
    let mut body = order_json();
    body["quantity"] = json!("3");
    let res = app
        .send(json_request(Method::POST, "/api/orders", body))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["order"]["quantity"].as_f64(), Some(3.0));
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let app = spawn_app().await;

    for field in ["customerName", "phone", "pickupLocation", "quantity", "productId"] {
        let mut body = order_json();
        body.as_object_mut().unwrap().remove(field);
        let res = app
            .send(json_request(Method::POST, "/api/orders", body))
            .await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "missing {field}");
        assert_eq!(res.json()["code"], 2);
    }

    let mut body = order_json();
    body["phone"] = json!("   ");
    let res = app
        .send(json_request(Method::POST, "/api/orders", body))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let stored = OrderRepository::new(app.state.db.clone())
        .find_all()
        .await
        .unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn non_json_body_is_treated_as_empty() {
    let app = spawn_app().await;
    let res = app
        .send(
            http::Request::builder()
                .method(Method::POST)
                .uri("/api/orders")
                .header(http::header::CONTENT_TYPE, "text/plain")
                .body(axum::body::Body::from("customerName=Ada"))
                .unwrap(),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()["details"]["field"], "customerName");
}
