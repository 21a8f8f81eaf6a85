use std::future::Future;
use axum::{
    Router,
    routing::{get, post},
};
use common::{SCORE_ENDPOINT, log};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::score_handler::{health, submit_score};
use crate::score_store::ScoreStore;

pub const HEALTH_ENDPOINT: &str = "/api/health";

#[derive(Clone)]
pub struct WebServerState<S: ScoreStore> {
    pub store: S,
}

pub fn build_router<S: ScoreStore>(store: S) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(SCORE_ENDPOINT, post(submit_score::<S>))
        .route(HEALTH_ENDPOINT, get(health))
        .layer(cors)
        .with_state(WebServerState { store })
}

pub async fn run_web_server<S: ScoreStore>(
    listener: TcpListener,
    store: S,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        log!("Score server listening on {}", addr);
    }

    axum::serve(listener, build_router(store))
        .with_graceful_shutdown(shutdown_signal)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score_store::memory::MemoryScoreStore;
    use common::{ErrorResponse, SubmitScoreRequest, SubmitScoreResponse};

    async fn spawn_server(store: MemoryScoreStore) -> String {
        common::logger::init_logger(None);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(run_web_server(listener, store, std::future::pending()));
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_post_score_over_http() {
        let store = MemoryScoreStore::default();
        let base_url = spawn_server(store.clone()).await;

        let response = reqwest::Client::new()
            .post(format!("{}{}", base_url, SCORE_ENDPOINT))
            .json(&SubmitScoreRequest {
                player_name: "Alice".to_string(),
                score: 10,
            })
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: SubmitScoreResponse = response.json().await.unwrap();
        assert!(body.success);
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].player_name, "Alice");
    }

    #[tokio::test]
    async fn test_missing_player_name_over_http() {
        let store = MemoryScoreStore::default();
        let base_url = spawn_server(store.clone()).await;

        let response = reqwest::Client::new()
            .post(format!("{}{}", base_url, SCORE_ENDPOINT))
            .json(&serde_json::json!({ "score": 5 }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json().await.unwrap();
        assert!(!body.error.is_empty());
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn test_field_types_are_not_checked_over_http() {
        let store = MemoryScoreStore::default();
        let base_url = spawn_server(store.clone()).await;

        for body in [
            serde_json::json!({ "playerName": "Alice", "score": "10" }),
            serde_json::json!({ "playerName": 42, "score": 10 }),
        ] {
            let response = reqwest::Client::new()
                .post(format!("{}{}", base_url, SCORE_ENDPOINT))
                .json(&body)
                .send()
                .await
                .unwrap();

            assert_eq!(response.status(), reqwest::StatusCode::OK);
        }

        assert_eq!(store.records().len(), 2);
    }

    #[tokio::test]
    async fn test_non_json_body_is_bad_request() {
        let store = MemoryScoreStore::default();
        let base_url = spawn_server(store.clone()).await;

        let response = reqwest::Client::new()
            .post(format!("{}{}", base_url, SCORE_ENDPOINT))
            .header("content-type", "application/json")
            .body("not json")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_over_http() {
        let base_url = spawn_server(MemoryScoreStore::failing()).await;

        let response = reqwest::Client::new()
            .post(format!("{}{}", base_url, SCORE_ENDPOINT))
            .json(&serde_json::json!({ "playerName": "Alice", "score": 10 }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json().await.unwrap();
        assert_eq!(body.error, "Failed to save score, please try again");
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let base_url = spawn_server(MemoryScoreStore::default()).await;

        let response = reqwest::get(format!("{}{}", base_url, HEALTH_ENDPOINT))
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
    }
}
