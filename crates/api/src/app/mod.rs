//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: validation + store calls, returning domain results
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(services)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        build_app(Arc::new(AppServices::in_memory()))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> axum::response::Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(v) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(v.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_bytes(res: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let res = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_sets_location_header() {
        let app = app();
        let res = send(&app, Method::POST, "/products", Some(json!({"name": "A", "price": 5}))).await;

        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(res.headers()[header::LOCATION], "/products/1");

        let body: Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
        assert_eq!(body, json!({"id": 1, "name": "A", "description": null, "price": 5.0}));
    }

    #[tokio::test]
    async fn not_found_has_empty_body() {
        let res = send(&app(), Method::GET, "/products/7", None).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(res).await.is_empty());
    }

    #[tokio::test]
    async fn non_numeric_id_is_a_bad_request() {
        let res = send(&app(), Method::DELETE, "/products/abc", None).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
        assert_eq!(body["error"], "invalid_id");
    }

    #[tokio::test]
    async fn negative_id_is_not_found() {
        let app = app();
        send(&app, Method::POST, "/products", Some(json!({"name": "A", "price": 5}))).await;

        let get = send(&app, Method::GET, "/products/-1", None).await;
        let put = send(
            &app,
            Method::PUT,
            "/products/-1",
            Some(json!({"name": "B", "price": 6})),
        )
        .await;
        let delete = send(&app, Method::DELETE, "/products/-1", None).await;

        for res in [get, put, delete] {
            assert_eq!(res.status(), StatusCode::NOT_FOUND);
            assert!(body_bytes(res).await.is_empty());
        }

        let invalid_put = send(
            &app,
            Method::PUT,
            "/products/-1",
            Some(json!({"name": "", "price": 6})),
        )
        .await;
        assert_eq!(invalid_put.status(), StatusCode::BAD_REQUEST);

        let list = send(&app, Method::GET, "/products", None).await;
        let items: Value = serde_json::from_slice(&body_bytes(list).await).unwrap();
        assert_eq!(items.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/products")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let res = app.clone().oneshot(request).await.unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
        assert_eq!(body["error"], "invalid_body");

        let list = send(&app, Method::GET, "/products", None).await;
        let items: Value = serde_json::from_slice(&body_bytes(list).await).unwrap();
        assert_eq!(items, json!([]));
    }

    #[tokio::test]
    async fn put_validation_wins_over_not_found() {
        let res = send(
            &app(),
            Method::PUT,
            "/products/99",
            Some(json!({"name": "   ", "price": 1})),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
        assert_eq!(body["message"], "Name is required.");
    }
}
