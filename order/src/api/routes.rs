/*
 * Responsibility
 * - URL 構造を定義
 * - /health は認証なし、/create は Auth Gate の内側
 */
use axum::{
    Router,
    routing::{get, post},
};
use common::auth;

use crate::api::handlers::{create::create_order, health::health};
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new().route("/create", post(create_order));

    Router::new()
        .route("/health", get(health))
        .merge(auth::apply(protected, state.auth.clone()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration as StdDuration;

    use async_trait::async_trait;
    use axum::{
        Json,
        body::Body,
        http::{HeaderMap, HeaderValue, Request, StatusCode, header},
        routing::get,
    };
    use chrono::Duration;
    use common::auth::{AuthConfig, AuthGate};
    use common::http::HttpConfig;
    use common::testutil::token_for;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tokio::net::TcpListener;
    use tower::ServiceExt;
    use url::Url;

    use crate::app::build_router;
    use crate::services::inventory_client::{
        HttpInventoryClient, InventoryError, InventoryGateway,
    };
    use crate::state::AppState;

    const SECRET: &str = "order-test-secret";

    enum Stub {
        Payload(Value),
        Status(StatusCode),
    }

    #[async_trait]
    impl InventoryGateway for Stub {
        async fn check(&self, _request_id: Option<&HeaderValue>) -> Result<Value, InventoryError> {
            match self {
                Stub::Payload(payload) => Ok(payload.clone()),
                Stub::Status(status) => Err(InventoryError::UnexpectedStatus(*status)),
            }
        }
    }

    fn gate() -> AuthGate {
        AuthGate::new(&AuthConfig::new(SECRET))
    }

    fn http_client(url: String) -> Arc<dyn InventoryGateway> {
        Arc::new(
            HttpInventoryClient::new(
                Url::parse(&url).unwrap(),
                axum::http::HeaderName::from_static("x-internal-service"),
                HeaderValue::from_static("order-service"),
                StdDuration::from_millis(200),
            )
            .unwrap(),
        )
    }

    fn inventory_payload(available: bool) -> Value {
        json!({
            "item_id": "Vinho-001",
            "available": available,
            "service": "InventoryService",
            "message": "Item is available.",
            "user": "internal_service",
        })
    }

    async fn post_create(
        inventory: Arc<dyn InventoryGateway>,
        authorization: Option<String>,
    ) -> (StatusCode, Value) {
        let app = build_router(AppState::new(gate(), inventory), &HttpConfig::default());

        let mut builder = Request::builder().method("POST").uri("/create");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }

        let resp = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn alice() -> Option<String> {
        let token = token_for(SECRET, "alice", Duration::minutes(5));
        Some(format!("Bearer {token}"))
    }

    #[tokio::test]
    async fn available_item_creates_order() {
        let inventory = Arc::new(Stub::Payload(inventory_payload(true)));

        let (status, body) = post_create(inventory, alice()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "Order Created");
        assert_eq!(body["user"], "alice");
        assert_eq!(body["message"], "Order processed and inventory confirmed.");
        assert_eq!(body["inventory_check"], inventory_payload(true));
    }

    #[tokio::test]
    async fn unavailable_item_is_business_failure() {
        let inventory = Arc::new(Stub::Payload(inventory_payload(false)));

        let (status, body) = post_create(inventory, alice()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"status": "Failed", "message": "Inventory check failed or item unavailable."})
        );
    }

    #[tokio::test]
    async fn inventory_error_status_is_business_failure() {
        let inventory = Arc::new(Stub::Status(StatusCode::INTERNAL_SERVER_ERROR));

        let (status, body) = post_create(inventory, alice()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "Failed");
    }

    #[tokio::test]
    async fn unreachable_inventory_is_503() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let (status, body) =
            post_create(http_client(format!("http://{addr}/check")), alice()).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "Error");
        assert_eq!(
            body["message"],
            "Cannot connect to Inventory Service. Service Discovery failed or service is down."
        );
    }

    #[tokio::test]
    async fn stalled_inventory_is_503_not_408() {
        // accepts the connection but never answers within the outer request timeout
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let inventory_app = axum::Router::new().route(
            "/check",
            get(|| async {
                tokio::time::sleep(StdDuration::from_secs(35)).await;
                Json(inventory_payload(true))
            }),
        );
        tokio::spawn(async move {
            axum::serve(listener, inventory_app).await.unwrap();
        });

        let (status, body) =
            post_create(http_client(format!("http://{addr}/check")), alice()).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "Error");
    }

    #[tokio::test]
    async fn missing_credentials_never_reach_inventory() {
        let inventory = Arc::new(Stub::Payload(inventory_payload(true)));

        let (status, body) = post_create(inventory, None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn inventory_call_is_tagged_internal_and_ignores_caller_token() {
        // stands in for the inventory gate: only the marker header gets through
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let inventory_app = axum::Router::new().route(
            "/check",
            get(|headers: HeaderMap| async move {
                if headers.contains_key(header::AUTHORIZATION) {
                    return (StatusCode::BAD_REQUEST, Json(json!({"error": "token forwarded"})));
                }
                match headers.get("x-internal-service") {
                    Some(caller) if caller == "order-service" => {
                        (StatusCode::OK, Json(inventory_payload(true)))
                    }
                    _ => (StatusCode::UNAUTHORIZED, Json(json!({"error": "no token"}))),
                }
            }),
        );
        tokio::spawn(async move {
            axum::serve(listener, inventory_app).await.unwrap();
        });

        let (status, body) =
            post_create(http_client(format!("http://{addr}/check")), alice()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["inventory_check"]["user"], "internal_service");
        assert_eq!(body["user"], "alice");
    }

    #[tokio::test]
    async fn health_is_open() {
        let app = build_router(
            AppState::new(gate(), Arc::new(Stub::Status(StatusCode::OK))),
            &HttpConfig::default(),
        );
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
