//! End-to-end tests against the fully assembled router.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use async_trait::async_trait;
use core_config::{Environment, app_info, server::ServerConfig};
use domain_items::{Item, ItemData, ItemError, ItemRepository, ItemResult};
use http_body_util::BodyExt;
use items_api::{AppState, Config, build_app};
use serde_json::{Value, json};
use tower::ServiceExt;

fn config() -> Config {
    Config {
        app: app_info!(),
        server: ServerConfig::default().with_public_domain("https://items.example.com"),
        environment: Environment::Development,
    }
}

async fn app() -> Router {
    build_app(&AppState::new(config())).await.unwrap()
}

/// Repository whose backing store is unreachable
struct UnreachableRepository;

#[async_trait]
impl ItemRepository for UnreachableRepository {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        Err(ItemError::Repository("connection refused".into()))
    }

    async fn get_by_id(&self, _id: i64) -> ItemResult<Option<Item>> {
        Err(ItemError::Repository("connection refused".into()))
    }

    async fn create(&self, _data: ItemData) -> ItemResult<Item> {
        Err(ItemError::Repository("connection refused".into()))
    }

    async fn update(&self, _id: i64, _data: ItemData) -> ItemResult<bool> {
        Err(ItemError::Repository("connection refused".into()))
    }

    async fn delete(&self, _id: i64) -> ItemResult<bool> {
        Err(ItemError::Repository("connection refused".into()))
    }

    async fn delete_all(&self) -> ItemResult<u64> {
        Err(ItemError::Repository("connection refused".into()))
    }

    async fn ping(&self) -> ItemResult<()> {
        Err(ItemError::Repository("connection refused".into()))
    }
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_health_reports_name_and_version() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["name"], "items_api");
}

#[tokio::test]
async fn test_ready_checks_repository() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/api/ready", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["repository"], "connected");
}

#[tokio::test]
async fn test_ready_returns_503_when_repository_is_down() {
    let state = AppState::with_repository(config(), UnreachableRepository);
    let app = build_app(&state).await.unwrap();
    let (status, body) = send(&app, "GET", "/api/ready", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "not ready");
    assert_eq!(body["repository"], "disconnected");
}

#[tokio::test]
async fn test_repository_failure_returns_500_without_internals() {
    let state = AppState::with_repository(config(), UnreachableRepository);
    let app = build_app(&state).await.unwrap();
    let (status, body) = send(&app, "GET", "/api/items", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "REPOSITORY_ERROR");
    assert!(!body["message"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_item_urls_use_public_domain() {
    let app = app().await;
    let (status, created) = send(&app, "POST", "/api/items", Some(json!({"name": "lamp"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["url"], "https://items.example.com/api/items/1");

    let (status, list) = send(&app, "GET", "/api/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([created]));
}

#[tokio::test]
async fn test_openapi_document_lists_item_paths() {
    let app = app().await;
    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/api/items").is_some());
    assert!(doc["paths"].get("/api/items/{id}").is_some());
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_unsupported_method_returns_json_405() {
    let app = app().await;
    let (status, body) = send(&app, "PATCH", "/api/items/1", Some(json!({"name": "x"}))).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["code"], 1006);
    assert_eq!(body["error"], "METHOD_NOT_ALLOWED");
}

#[tokio::test]
async fn test_non_integer_id_on_replace_and_delete_returns_400() {
    let app = app().await;

    let (status, body) = send(&app, "DELETE", "/api/items/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ID");

    let (status, body) = send(&app, "PUT", "/api/items/abc", Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_security_headers_are_set_on_every_route() {
    let app = app().await;

    for uri in ["/health", "/api/ready", "/api/items", "/nope"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("x-content-type-options").map(|v| v.as_bytes()),
            Some(&b"nosniff"[..]),
            "missing security headers on {uri}"
        );
    }
}
