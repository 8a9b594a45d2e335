use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, metrics_middleware};
use super::state::AppState;
use super::v1;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Create the full router with application state
pub fn create_router(state: AppState, metrics: Option<PrometheusMetrics>) -> Router {
    let mut router = Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Team API
        .nest("/v1", v1::create_v1_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http());

    if let Some(m) = metrics {
        router = router.merge(create_metrics_router(m));
    }

    router
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::infrastructure::team::InMemoryTeamRegistry;

    fn app() -> Router {
        let registry = Arc::new(InMemoryTeamRegistry::default());
        create_router(AppState::new(registry), None)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_team_lifecycle() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/v1/teams",
            Some(json!({"leader_id": 1, "members": [2, 3]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["team_id"], 1);

        let (status, _) = send(&app, Method::POST, "/v1/teams/1/members", Some(json!({"player_id": 4}))).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, Method::GET, "/v1/teams/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["members"], json!([1, 2, 3, 4]));
        assert_eq!(body["capacity"], 5);

        let (status, body) = send(&app, Method::POST, "/v1/players/1/leave", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], 0);

        let (_, body) = send(&app, Method::GET, "/v1/players/4", None).await;
        assert_eq!(body["leader_id"], 2);

        let (status, body) = send(
            &app,
            Method::POST,
            "/v1/teams/1/disband",
            Some(json!({"acting_leader_id": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], 5006);

        let (status, _) = send(
            &app,
            Method::POST,
            "/v1/teams/1/disband",
            Some(json!({"acting_leader_id": 2})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/v1/stats", None).await;
        assert_eq!(body["teams"], 0);
        assert_eq!(body["players"], 0);
        assert_eq!(body["last_team_id"], 1);
    }

    #[tokio::test]
    async fn test_applications() {
        let app = app();
        send(&app, Method::POST, "/v1/teams", Some(json!({"leader_id": 1}))).await;

        for player_id in [5, 6] {
            let (status, _) = send(
                &app,
                Method::POST,
                "/v1/teams/1/applications",
                Some(json!({"player_id": player_id})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = send(
            &app,
            Method::POST,
            "/v1/teams/1/applications",
            Some(json!({"player_id": 5})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], 5020);

        let (_, body) = send(&app, Method::DELETE, "/v1/teams/1/applications/5", None).await;
        assert_eq!(body["removed"], 1);

        let (_, body) = send(&app, Method::DELETE, "/v1/teams/1/applications", None).await;
        assert_eq!(body["removed"], 1);
    }

    #[tokio::test]
    async fn test_unknown_team_and_bad_body() {
        let app = app();

        let (status, body) = send(&app, Method::GET, "/v1/teams/42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], 5013);

        let (status, body) = send(&app, Method::GET, "/v1/players/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], 5004);

        let (status, body) = send(&app, Method::POST, "/v1/teams", Some(json!({"leader": 1}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["type"], "invalid_request_error");

        let (status, _) = send(
            &app,
            Method::POST,
            "/v1/teams",
            Some(json!({"leader_id": 1, "capacity": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
