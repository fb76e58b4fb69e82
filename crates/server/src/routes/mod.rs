//! HTTP route handlers for the order service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//!
//! # Orders
//! POST /orders                 - Create an order (validate, then store)
//! GET  /orders                 - List accepted orders
//!
//! # Products
//! GET  /products               - Product catalog
//! GET  /products/{id}          - One product
//! ```

pub mod orders;
pub mod products;

use axum::{
    Router,
    extract::Request,
    middleware::from_fn,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::middleware::request_id_middleware;
use crate::state::AppState;

/// Create the API routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/orders",
            get(orders::list_orders).post(orders::create_order),
        )
        .route("/products", get(products::list_products))
        .route("/products/{id}", get(products::get_product))
}

/// Build the full application: routes, health check and HTTP layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .with_state(state)
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request as HttpRequest, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use url::Url;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::{GeocoderConfig, ServerConfig};
    use crate::middleware::REQUEST_ID_HEADER;
    use crate::store::ProductStore;

    fn test_app(server: &MockServer) -> Router {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            geocoder: GeocoderConfig {
                base_url: Url::parse(&server.uri()).unwrap(),
            },
            catalog_path: None,
            sentry_dsn: None,
            sentry_environment: None,
        };
        app(AppState::new(config, ProductStore::builtin()).unwrap())
    }

    async fn segur_geocoder() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": [{
                "properties": {"name": "20 Avenue de Segur", "postcode": "75007", "city": "Paris"}
            }]})))
            .mount(&server)
            .await;
        server
    }

    fn post_order(body: &Value) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("POST")
            .uri("/orders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> HttpRequest<Body> {
        HttpRequest::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_order(id: &str) -> Value {
        json!({
            "id": id,
            "customer": {"first_name": "Joe", "last_name": "John"},
            "shipping_address": {
                "street_address": "20 avenue de Ségur",
                "postal_code": "75007",
                "city": "Paris",
                "country": "France"
            },
            "line_items": [{"product_id": "PIPR-JACKET-SIZM", "quantity": 5}]
        })
    }

    #[tokio::test]
    async fn test_health() {
        let server = MockServer::start().await;
        let response = test_app(&server).oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let server = segur_geocoder().await;
        let app = test_app(&server);

        let response = app.clone().oneshot(post_order(&valid_order("1"))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({}));

        let response = app.oneshot(get("/orders")).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(body["orders"].as_array().unwrap().len(), 1);
        assert_eq!(body["orders"][0]["shipping_address"]["street_address"], "20 Avenue de Segur");
    }

    #[tokio::test]
    async fn test_rejection_is_json_error() {
        let server = MockServer::start().await;
        let app = test_app(&server);

        let mut order = valid_order("7");
        order["shipping_address"]["country"] = json!("Espagne");

        let response = app.oneshot(post_order(&order)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({"error": "send in France only"}));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let server = MockServer::start().await;
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/orders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = test_app(&server).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_geocoder_outage_is_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let response = test_app(&server)
            .oneshot(post_order(&valid_order("1")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            json_body(response).await,
            json!({"error": "address service unavailable"})
        );
    }

    #[tokio::test]
    async fn test_products() {
        let server = MockServer::start().await;
        let app = test_app(&server);

        let response = app.clone().oneshot(get("/products")).await.unwrap();
        let body = json_body(response).await;
        assert!(!body["products"].as_array().unwrap().is_empty());

        let response = app.clone().oneshot(get("/products/PIPR-MOSPAD-0000")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["id"], "PIPR-MOSPAD-0000");

        let response = app.oneshot(get("/products/UNKNOWN")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_request_id_is_echoed_or_generated() {
        let server = MockServer::start().await;
        let app = test_app(&server);

        let request = HttpRequest::builder()
            .uri("/health")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");

        let response = app.oneshot(get("/health")).await.unwrap();
        let generated = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert_eq!(generated.len(), 36);
    }
}
