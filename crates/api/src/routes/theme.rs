use std::convert::Infallible;

use axum::{
    extract::State,
    http::header,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    routing::get,
    Json, Router,
};
use futures::stream::{self, Stream};
use serde_json::{json, Value};
use site_content_core::theme::{inline_theme_script, StyleVariables};
use site_content_core::{SiteEvent, THEME_SIGNAL_KEY};
use tokio::sync::broadcast::error::RecvError;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Theme routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/theme", get(get_theme))
        .route("/api/theme/styles.css", get(theme_stylesheet))
        .route("/api/theme/bootstrap", get(theme_bootstrap))
        .route("/api/theme/events", get(theme_events))
}

async fn get_theme(State(state): State<AppState>) -> Json<Value> {
    let theme = state.content().get_theme().await;
    Json(json!({ "theme": theme }))
}

/// `:root` rule with every theme variable.
async fn theme_stylesheet(State(state): State<AppState>) -> impl IntoResponse {
    let theme = state.content().get_theme().await;
    let styles = StyleVariables::new();
    styles.write_theme(&theme);
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], styles.to_css())
}

/// Inline script for the page shell, so first paint uses the stored theme.
async fn theme_bootstrap(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let theme = state.content().get_theme().await;
    let script = inline_theme_script(&theme)
        .map_err(|e| ApiError::Internal(format!("failed to encode theme: {e}")))?;
    Ok(([(header::CONTENT_TYPE, "text/html; charset=utf-8")], script))
}

/// Server-sent `theme-updated` events, one per applied theme.
async fn theme_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.event_bus().subscribe();
    tracing::debug!("theme listener connected");

    let events = stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(SiteEvent::ThemeUpdated(theme)) => {
                    match Event::default().event(THEME_SIGNAL_KEY).json_data(&theme) {
                        Ok(event) => return Some((Ok(event), rx)),
                        Err(err) => tracing::warn!(error = %err, "failed to encode theme event"),
                    }
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "theme listener lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}
