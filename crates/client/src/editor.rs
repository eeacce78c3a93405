use std::sync::Arc;

use site_content_core::signal::publish_theme_signal;
use site_content_core::{
    default_content, normalize_content, ContentDocument, SignalStore, ThemeApplier,
};

use crate::error::ClientError;
use crate::source::ContentSource;

/// In-memory edit copy of the homepage document for the admin portal.
///
/// Edits stay local until [`save`](ContentEditor::save). A failed save
/// leaves the edit copy as it was so the user can retry.
pub struct ContentEditor {
    source: Arc<dyn ContentSource>,
    applier: ThemeApplier,
    signals: Arc<dyn SignalStore>,
    content: ContentDocument,
}

impl ContentEditor {
    pub fn new(
        source: Arc<dyn ContentSource>,
        applier: ThemeApplier,
        signals: Arc<dyn SignalStore>,
    ) -> Self {
        Self {
            source,
            applier,
            signals,
            content: default_content().clone(),
        }
    }

    pub fn content(&self) -> &ContentDocument {
        &self.content
    }

    /// Load the stored document into the edit copy. On failure the copy is
    /// kept and the error logged.
    pub async fn fetch_content(&mut self) {
        match self.source.fetch().await {
            Ok(Some(raw)) => self.content = normalize_content(&raw),
            Ok(None) => {}
            Err(err) => tracing::warn!(error = %err, "failed to load content for editing"),
        }
    }

    pub fn update(&mut self, edit: impl FnOnce(&mut ContentDocument)) {
        edit(&mut self.content);
    }

    /// Send the edit copy to the store, then broadcast its theme locally and
    /// to other tabs.
    pub async fn save(&self) -> Result<(), ClientError> {
        if let Err(err) = self.source.save(&self.content).await {
            tracing::error!(error = %err, "failed to save content");
            return Err(err);
        }

        self.applier.apply_theme(&self.content.theme);
        if let Err(err) = publish_theme_signal(self.signals.as_ref(), &self.content.theme) {
            tracing::warn!(error = %err, "failed to publish theme signal");
        }
        Ok(())
    }
}
