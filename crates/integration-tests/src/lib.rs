//! Integration tests for Order Gate.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p order-gate-integration-tests
//! ```
//!
//! The tests drive the full HTTP router in-process with
//! `tower::ServiceExt::oneshot`; the address geocoding service is replaced by
//! a `wiremock` server, so no network access is needed.
//!
//! This library holds the shared harness: [`TestContext`] builds an app wired
//! to a mock geocoder and exposes typed helpers for the order endpoints.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use order_gate_core::Order;
use order_gate_server::config::{GeocoderConfig, ServerConfig};
use order_gate_server::routes::{self, orders::ListOrdersResponse};
use order_gate_server::state::AppState;
use order_gate_server::store::ProductStore;
use serde_json::{Value, json};
use tower::ServiceExt;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// An app instance wired to its own mock geocoder.
pub struct TestContext {
    pub app: Router,
    pub geocoder: MockServer,
}

impl TestContext {
    /// Start a mock geocoder and build an app that uses it.
    ///
    /// # Panics
    ///
    /// Panics if the app cannot be built.
    pub async fn new() -> Self {
        let geocoder = MockServer::start().await;
        let config = ServerConfig {
            host: "127.0.0.1".parse().expect("host"),
            port: 0,
            geocoder: GeocoderConfig {
                base_url: Url::parse(&geocoder.uri()).expect("geocoder url"),
            },
            catalog_path: None,
            sentry_dsn: None,
            sentry_environment: None,
        };
        let state = AppState::new(config, ProductStore::builtin()).expect("app state");

        Self {
            app: routes::app(state),
            geocoder,
        }
    }

    /// Make the geocoder answer every search with these candidates.
    pub async fn geocoder_returns(&self, features: &[(&str, &str, &str)]) {
        let features: Vec<Value> = features
            .iter()
            .map(|(name, postcode, city)| {
                json!({
                    "type": "Feature",
                    "properties": {"name": name, "postcode": postcode, "city": city}
                })
            })
            .collect();

        Mock::given(method("GET"))
            .and(path("/search/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"type": "FeatureCollection", "features": features})),
            )
            .mount(&self.geocoder)
            .await;
    }

    /// Submit an order, returning the status and JSON body.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be sent or the body is not JSON.
    pub async fn create_order(&self, order: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/orders")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(order.to_string()))
            .expect("request");
        let response = self.app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    /// Every stored order.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the body is not a listing.
    pub async fn list_orders(&self) -> Vec<Order> {
        let request = Request::builder()
            .uri("/orders")
            .body(Body::empty())
            .expect("request");
        let response = self.app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let listing: ListOrdersResponse = serde_json::from_slice(&bytes).expect("listing");
        listing.orders
    }
}

/// The reference order: Joe John, 20 avenue de Ségur, one jacket line.
#[must_use]
pub fn reference_order(id: &str) -> Value {
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
