//! End-to-end tests of the product routes over real HTTP.

use reqwest::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;

use product_api::ProductManager;

mod common;

#[tokio::test]
async fn test_greeting() {
    let server = common::start_server(Arc::new(ProductManager::in_memory())).await;
    let res = common::client().get(server.url("/")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "Bienvenidos");
    server.stop().await;
}

#[tokio::test]
async fn test_create_fetch_delete_scenario() {
    let server = common::start_server(Arc::new(ProductManager::in_memory())).await;
    let client = common::client();

    let res = client
        .post(server.url("/products"))
        .json(&common::pen("P001"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Product added");
    assert_eq!(body["product"]["id"], 1);
    assert_eq!(body["product"]["code"], "P001");
    assert_eq!(body["product"]["price"], 2);
    let created = body["product"].clone();

    let res = client.get(server.url("/products/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["product"], created);

    let res = client.delete(server.url("/products/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["productDeleted"], created);

    let res = client.get(server.url("/products/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Product not found with the ID sent." }));

    server.stop().await;
}

#[tokio::test]
async fn test_update_over_http() {
    let server = common::start_server(Arc::new(ProductManager::in_memory())).await;
    let client = common::client();

    client
        .post(server.url("/products"))
        .json(&common::pen("P001"))
        .send()
        .await
        .unwrap();

    let res = client
        .put(server.url("/products/1"))
        .json(&json!({ "description": "Black ink" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["ProductUpdated"]["id"], 1);
    assert_eq!(body["ProductUpdated"]["description"], "Black ink");
    assert_eq!(body["ProductUpdated"]["title"], "Pen");

    let res = client
        .put(server.url("/products/2"))
        .json(&json!({ "description": "Black ink" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    server.stop().await;
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let server = common::start_server(Arc::new(ProductManager::in_memory())).await;
    let res = common::client().get(server.url("/orders")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    server.stop().await;
}

#[tokio::test]
async fn test_file_store_persists_across_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.json");
    let client = common::client();

    let server = common::start_server(Arc::new(ProductManager::open(&path).await.unwrap())).await;
    for code in ["A", "B"] {
        let res = client
            .post(server.url("/products"))
            .json(&common::pen(code))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }
    client.delete(server.url("/products/2")).send().await.unwrap();
    server.stop().await;

    let server = common::start_server(Arc::new(ProductManager::open(&path).await.unwrap())).await;
    let body: Value = client
        .get(server.url("/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["products"].as_array().unwrap().len(), 1);
    assert_eq!(body["products"][0]["code"], "A");

    let body: Value = client
        .post(server.url("/products"))
        .json(&common::pen("C"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["product"]["id"], 3);

    server.stop().await;
}
