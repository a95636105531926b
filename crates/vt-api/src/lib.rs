//! # vt-api — Axum API Services
//!
//! The HTTP surface of the Veritrade backend, built on Axum/Tower/Tokio.
//! Assembles the route groups into a single application with shared
//! middleware for tracing and CORS.
//!
//! ## Routes
//!
//! - `/v1/products/*` — product catalog and search
//! - `/v1/users/{id}/cart*` — cart contents and mutations
//! - `/v1/verify` — offline verification over a recorded proof payload
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers — delegates to domain crates.
//! - All errors map to structured HTTP responses via `AppError`.

use std::net::SocketAddr;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::AppState;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::products::router())
        .merge(routes::cart::router())
        .merge(routes::verify::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the application.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "api listening");
    axum::serve(listener, app(state)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use vt_core::{ProductId, ProviderId, ProviderProfile, ProviderRegistry};
    use vt_store::{MemoryStore, Product};
    use vt_verify::SessionConfig;

    fn test_state() -> AppState {
        let store = Arc::new(MemoryStore::with_products(vec![Product {
            id: ProductId("widget-1".into()),
            name: "Retro Widget".into(),
            price: 120.0,
            image: None,
            condition: Some("Like new".into()),
            owner: Some("Ayesha".into()),
            verification_badges: vec!["Rare-T".into()],
        }]));
        let registry = ProviderRegistry::new(vec![ProviderProfile {
            key: "rare-t".into(),
            label: "Rare-T".into(),
            provider_id: ProviderId::new("rare-t-orders-v1").unwrap(),
            enabled: true,
        }]);
        AppState::new(store, registry, SessionConfig::new("app", "secret"))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_products() {
        let response = app(test_state())
            .oneshot(Request::get("/v1/products").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["verificationBadges"][0], "Rare-T");
    }

    #[tokio::test]
    async fn test_product_search_filter() {
        let response = app(test_state())
            .oneshot(
                Request::get("/v1/products?q=retro")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);

        let response = app(test_state())
            .oneshot(
                Request::get("/v1/products?q=nothing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_product_is_404() {
        let response = app(test_state())
            .oneshot(
                Request::get("/v1/products/ghost")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cart_add_and_view() {
        let state = test_state();
        let application = app(state);

        let response = application
            .clone()
            .oneshot(
                Request::post("/v1/users/xion1q/cart")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"product_id":"widget-1"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "added");

        let response = application
            .oneshot(
                Request::get("/v1/users/xion1q/cart")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 1);
        assert_eq!(body["total"], 120.0);
    }

    #[tokio::test]
    async fn test_verify_endpoint_verdicts() {
        let context = json!({
            "extractedParameters": {
                "count": "1",
                "orders": "[{\"orderId\":\"ORD1\",\"name\":\"Widget\",\"date_purchased\":\"01/01/2024\"}]"
            }
        });
        let payload = json!({
            "proofs": [{
                "claimData": {
                    "provider": "http",
                    "parameters": "{}",
                    "context": serde_json::to_string(&context).unwrap(),
                    "identifier": "0x1",
                    "owner": "0x2",
                    "epoch": 1,
                    "timestampS": 1700000000
                },
                "signatures": ["0xsig"]
            }]
        });
        let request_body = json!({
            "account": "xion1qseller",
            "provider_key": "rare-t",
            "claim": {
                "product_name": "Widget",
                "date_purchased": "2024-01-01",
                "order_id": "ORD1",
                "order_details": "mint"
            },
            "payload": payload
        });

        let response = app(test_state())
            .oneshot(
                Request::post("/v1/verify")
                    .header("content-type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["verified"], true);
        assert_eq!(body["matched_order"]["order_id"], "ORD1");
        assert_eq!(body["session_state"], "COMPLETE");
    }

    #[tokio::test]
    async fn test_verify_unknown_provider_rejected() {
        let request_body = json!({
            "account": "xion1qseller",
            "provider_key": "ghost-mart",
            "claim": {
                "product_name": "Widget",
                "date_purchased": "2024-01-01",
                "order_id": "ORD1",
                "order_details": "mint"
            },
            "payload": {"proofs": []}
        });
        let response = app(test_state())
            .oneshot(
                Request::post("/v1/verify")
                    .header("content-type", "application/json")
                    .body(Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
