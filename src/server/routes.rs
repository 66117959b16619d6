// src/server/routes.rs
//! Axum router configuration for the cookbook server

use crate::server::handlers::{entry, parse, summary};
use crate::server::{ServerConfig, ServerState};
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Create the main application router
pub fn create_router(config: &ServerConfig, state: Arc<RwLock<ServerState>>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/parse", post(parse::parse_name))
        .route("/entry", post(entry::create_entry))
        .route("/summary", get(summary::get_summary))
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(cors_layer(&config.cors_allowed_origins))
        .with_state(state)
}

/// Permissive when no origins are configured
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let config = ServerConfig::default();
        let state = Arc::new(RwLock::new(ServerState::new(config.clone())));
        create_router(&config, state)
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_parse_endpoint() {
        let response = app()
            .oneshot(post_json("/parse", &json!({"input": "Riz@z RISO00tto!"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"msg": "Rizz Risotto"}));

        let response = app()
            .oneshot(post_json("/parse", &json!({"input": "123"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "invalid_name");
    }

    #[tokio::test]
    async fn test_entry_then_summary() {
        let app = app();

        let entries = [
            json!({"type": "ingredient", "name": "Egg", "cookTime": 6}),
            json!({"type": "ingredient", "name": "Milk", "cookTime": 1}),
            json!({"type": "recipe", "name": "Omelette", "requiredItems": [
                {"name": "Egg", "quantity": 3},
                {"name": "Milk", "quantity": 1}
            ]}),
        ];
        for entry in &entries {
            let response = app.clone().oneshot(post_json("/entry", entry)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(json_body(response).await, json!({}));
        }

        let response = app.clone().oneshot(get_request("/summary?name=Omelette")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({
                "name": "Omelette",
                "cookTime": 7,
                "requiredIngredients": [
                    {"name": "Egg", "quantity": 3},
                    {"name": "Milk", "quantity": 1}
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_duplicate_entry_rejected() {
        let app = app();
        let egg = json!({"type": "ingredient", "name": "Egg", "cookTime": 6});

        let response = app.clone().oneshot(post_json("/entry", &egg)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.clone().oneshot(post_json("/entry", &egg)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "invalid_item");
    }

    #[tokio::test]
    async fn test_summary_errors() {
        let app = app();
        let egg = json!({"type": "ingredient", "name": "Egg", "cookTime": 6});
        app.clone().oneshot(post_json("/entry", &egg)).await.unwrap();

        let response = app.clone().oneshot(get_request("/summary?name=Egg")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "not_a_recipe");

        let response = app.clone().oneshot(get_request("/summary?name=Cake")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "not_found");

        let response = app.clone().oneshot(get_request("/summary")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "not_found");
    }

    #[tokio::test]
    async fn test_summary_missing_dependency() {
        let app = app();
        let toast = json!({"type": "recipe", "name": "Toast", "requiredItems": [
            {"name": "Bread", "quantity": 1}
        ]});
        app.clone().oneshot(post_json("/entry", &toast)).await.unwrap();

        let response = app.clone().oneshot(get_request("/summary?name=Toast")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "missing_dependency");
        assert!(body["message"].as_str().unwrap().contains("Bread"));
    }

    #[tokio::test]
    async fn test_summary_name_is_url_decoded() {
        let app = app();
        for entry in [
            json!({"type": "ingredient", "name": "Tomato Sauce", "cookTime": 10}),
            json!({"type": "recipe", "name": "Skibidi Spaghetti", "requiredItems": [
                {"name": "Tomato Sauce", "quantity": 2}
            ]}),
        ] {
            app.clone().oneshot(post_json("/entry", &entry)).await.unwrap();
        }

        let response = app
            .clone()
            .oneshot(get_request("/summary?name=Skibidi%20Spaghetti"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["cookTime"], 10);
    }

    #[tokio::test]
    async fn test_fractional_quantity_round_trip() {
        let app = app();
        for entry in [
            json!({"type": "ingredient", "name": "Salt", "cookTime": 0}),
            json!({"type": "recipe", "name": "Brine", "requiredItems": [
                {"name": "Salt", "quantity": 0.5}
            ]}),
        ] {
            let response = app.clone().oneshot(post_json("/entry", &entry)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.clone().oneshot(get_request("/summary?name=Brine")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await["requiredIngredients"],
            json!([{"name": "Salt", "quantity": 0.5}])
        );
    }

    #[tokio::test]
    async fn test_body_limit() {
        let config = ServerConfig {
            max_body_size: 16,
            ..ServerConfig::default()
        };
        let state = Arc::new(RwLock::new(ServerState::new(config.clone())));
        let app = create_router(&config, state);

        let big = json!({"type": "ingredient", "name": "A very long ingredient name", "cookTime": 1});
        let response = app.oneshot(post_json("/entry", &big)).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
