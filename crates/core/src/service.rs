use std::sync::Arc;

use serde_json::Value;

use crate::cache::ContentCache;
use crate::content::{normalize_content, ContentDocument};
use crate::document::key::DocumentKind;
use crate::error::StoreError;
use crate::events::types::{ContentSavedEvent, SiteEvent};
use crate::repository::ContentRepository;
use crate::signal::{publish_theme_signal, SignalStore};
use crate::theme::{ThemeApplier, ThemeDocument};

/// Reads and saves the homepage document, keeping the cache, the style
/// variables and every listener in step with the store.
pub struct ContentService {
    repository: Arc<dyn ContentRepository>,
    cache: ContentCache,
    applier: ThemeApplier,
    signals: Arc<dyn SignalStore>,
}

impl ContentService {
    pub fn new(
        repository: Arc<dyn ContentRepository>,
        cache: ContentCache,
        applier: ThemeApplier,
        signals: Arc<dyn SignalStore>,
    ) -> Self {
        Self {
            repository,
            cache,
            applier,
            signals,
        }
    }

    pub fn repository(&self) -> &Arc<dyn ContentRepository> {
        &self.repository
    }

    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    pub fn applier(&self) -> &ThemeApplier {
        &self.applier
    }

    pub fn signals(&self) -> &Arc<dyn SignalStore> {
        &self.signals
    }

    pub async fn get_content(&self) -> Arc<ContentDocument> {
        self.cache.get_content().await
    }

    pub async fn get_theme(&self) -> ThemeDocument {
        self.cache.get_content().await.theme.clone()
    }

    /// Normalize and persist `raw`, replacing the stored document.
    ///
    /// Once the store accepts it, the cache is overwritten so the next read
    /// sees the new data without waiting for the TTL, and the saved theme is
    /// applied and announced. A store failure leaves all of that untouched.
    pub async fn save_content(&self, raw: &Value) -> Result<Arc<ContentDocument>, StoreError> {
        let content = normalize_content(raw);
        if let Err(err) = self.repository.save(DocumentKind::Homepage, &content).await {
            tracing::error!(error = %err, "failed to save content");
            return Err(err);
        }

        let saved = self.cache.set_content(content).await;
        self.applier.apply_theme(&saved.theme);
        if let Err(err) = publish_theme_signal(self.signals.as_ref(), &saved.theme) {
            tracing::warn!(error = %err, "failed to publish theme signal");
        }
        let _ = self
            .applier
            .bus()
            .publish(SiteEvent::ContentSaved(ContentSavedEvent::new(DocumentKind::Homepage)));

        tracing::info!("homepage content saved");
        Ok(saved)
    }
}
