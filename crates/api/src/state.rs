use std::sync::Arc;

use site_content_core::{ContentService, EventBus};

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    content: ContentService,
    config: AppConfig,
}

impl AppState {
    pub fn new(content: ContentService, config: AppConfig) -> Self {
        Self {
            inner: Arc::new(InnerState { content, config }),
        }
    }

    pub fn content(&self) -> &ContentService {
        &self.inner.content
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn event_bus(&self) -> &EventBus {
        self.inner.content.applier().bus()
    }
}
