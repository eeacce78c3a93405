use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::auth::AdminUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Homepage content routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/content", get(get_content).put(put_content))
}

/// Normalized homepage content, served through the cache.
async fn get_content(State(state): State<AppState>) -> Json<Value> {
    let content = state.content().get_content().await;
    Json(json!({ "content": content.as_ref() }))
}

/// Replace the homepage document. Admin only.
async fn put_content(
    State(state): State<AppState>,
    admin: AdminUser,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(body) = body?;
    if !body.is_object() {
        return Err(ApiError::BadRequest(
            "content must be a JSON object".to_string(),
        ));
    }

    state.content().save_content(&body).await?;
    tracing::info!(subject = %admin.subject, "content updated");

    Ok(Json(json!({
        "success": true,
        "message": "Content updated successfully",
    })))
}
