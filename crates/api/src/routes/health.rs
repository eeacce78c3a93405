use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/ping", get(ping))
}

/// Full health check, verifies the content store is reachable.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state.content().repository().ping().await.map_err(|e| {
        crate::error::ApiError::Internal(format!("content store health check failed: {e}"))
    })?;

    Ok(Json(json!({
        "status": "ok",
        "store": "connected",
        "subscribers": state.event_bus().subscriber_count(),
    })))
}

/// Lightweight ping without a store check.
async fn ping() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::{build_router, test_support::*};
    use crate::state::test_support::memory_state;

    #[tokio::test]
    async fn health_reports_store() {
        let app = build_router(memory_state());
        let (status, body) = send_json(app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["store"], "connected");
        assert_eq!(body["subscribers"], 0);
    }

    #[tokio::test]
    async fn ping_is_ok() {
        let app = build_router(memory_state());
        let (status, body) = send_json(app, get("/v1/ping")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
