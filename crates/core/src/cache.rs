use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::content::{default_content, normalize_content, ContentDocument};
use crate::document::key::DocumentKind;
use crate::repository::ContentRepository;

/// How long a fetched document is served before the store is asked again.
pub const CONTENT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug)]
struct CacheEntry {
    value: Arc<ContentDocument>,
    cached_at: Instant,
}

/// Last fetched homepage content, held for [`CONTENT_CACHE_TTL`].
///
/// One instance per process, shared by reference. Reads do not coordinate:
/// two callers hitting a cold cache may both go to the store, and the last
/// one to finish wins.
pub struct ContentCache {
    repository: Arc<dyn ContentRepository>,
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
}

impl ContentCache {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self::with_ttl(repository, CONTENT_CACHE_TTL)
    }

    pub fn with_ttl(repository: Arc<dyn ContentRepository>, ttl: Duration) -> Self {
        Self {
            repository,
            ttl,
            entry: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    async fn fresh(&self) -> Option<Arc<ContentDocument>> {
        let entry = self.entry.read().await;
        entry
            .as_ref()
            .filter(|e| e.cached_at.elapsed() < self.ttl)
            .map(|e| Arc::clone(&e.value))
    }

    async fn last_known(&self) -> Option<Arc<ContentDocument>> {
        self.entry.read().await.as_ref().map(|e| Arc::clone(&e.value))
    }

    /// Current content. Served from memory while fresh; otherwise loaded,
    /// normalized and stored.
    ///
    /// A failed load is logged and answered with the last cached value, or
    /// the default document when there is none. Failures are not cached.
    pub async fn get_content(&self) -> Arc<ContentDocument> {
        if let Some(value) = self.fresh().await {
            return value;
        }

        match self.repository.load(DocumentKind::Homepage).await {
            Ok(raw) => {
                let content = match raw {
                    Some(raw) => normalize_content(&raw),
                    None => default_content().clone(),
                };
                tracing::debug!("content cache refreshed");
                self.set_content(content).await
            }
            Err(err) => {
                tracing::warn!(error = %err, "content fetch failed, serving cached or default content");
                match self.last_known().await {
                    Some(value) => value,
                    None => Arc::new(default_content().clone()),
                }
            }
        }
    }

    /// Replace the cached value and restart its TTL.
    pub async fn set_content(&self, content: ContentDocument) -> Arc<ContentDocument> {
        let value = Arc::new(content);
        *self.entry.write().await = Some(CacheEntry {
            value: Arc::clone(&value),
            cached_at: Instant::now(),
        });
        value
    }

    /// Drop the cached value so the next read goes to the store.
    pub async fn clear(&self) {
        *self.entry.write().await = None;
    }
}
