pub mod content;
pub mod health;
pub mod theme;

use axum::{extract::DefaultBodyLimit, Router};

use crate::state::AppState;

/// Content documents are small; anything larger is a mistake. Enforced by
/// the body extractors so the rejection carries the JSON error envelope.
pub(crate) const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(content::routes())
        .merge(theme::routes())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
