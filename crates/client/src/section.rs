use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;
use site_content_core::{normalize_content, Section};
use tokio::sync::watch;

use crate::source::ContentSource;

/// Progress of the most recent fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStatus {
    pub loading: bool,
    pub error: Option<String>,
}

struct SectionInner<S: Section> {
    source: Arc<dyn ContentSource>,
    content: watch::Sender<S>,
    status: watch::Sender<FetchStatus>,
    mounted: AtomicBool,
}

impl<S: Section> SectionInner<S> {
    async fn refetch(&self) {
        self.status.send_replace(FetchStatus {
            loading: true,
            error: None,
        });

        let (next, error) = match self.source.fetch().await {
            Ok(Some(raw)) => (S::select(&normalize_content(&raw)).clone(), None),
            Ok(None) => (S::default_value(), None),
            Err(err) => {
                tracing::warn!(section = S::KEY.as_str(), error = %err, "content fetch failed");
                (S::default_value(), Some(err.to_string()))
            }
        };

        if !self.mounted.load(Ordering::Acquire) {
            tracing::debug!(section = S::KEY.as_str(), "discarding fetch for unmounted section");
            return;
        }

        self.content.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
        self.status.send_replace(FetchStatus {
            loading: false,
            error,
        });
    }
}

/// Live view of one content section.
///
/// Starts out with the section's default value. Subscribers are only woken
/// when the section itself changes, not on every fetch.
pub struct SectionHandle<S: Section> {
    inner: Arc<SectionInner<S>>,
}

impl<S: Section> SectionHandle<S> {
    fn with_value(source: Arc<dyn ContentSource>, value: S, loading: bool) -> Self {
        let (content, _) = watch::channel(value);
        let (status, _) = watch::channel(FetchStatus {
            loading,
            error: None,
        });
        Self {
            inner: Arc::new(SectionInner {
                source,
                content,
                status,
                mounted: AtomicBool::new(true),
            }),
        }
    }

    /// Mount and start fetching in the background. Must be called inside a
    /// Tokio runtime.
    pub fn mount(source: Arc<dyn ContentSource>) -> Self {
        let handle = Self::with_value(source, S::default_value(), true);
        let inner = Arc::clone(&handle.inner);
        tokio::spawn(async move { inner.refetch().await });
        handle
    }

    /// Mount with content already rendered by the server. No fetch is made.
    pub fn with_initial(source: Arc<dyn ContentSource>, initial: &Value) -> Self {
        let value = S::select(&normalize_content(initial)).clone();
        Self::with_value(source, value, false)
    }

    pub fn content(&self) -> S {
        self.inner.content.borrow().clone()
    }

    pub fn status(&self) -> FetchStatus {
        self.inner.status.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.status.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.inner.status.borrow().error.clone()
    }

    /// Fetch again and publish the section if it changed.
    pub async fn refetch(&self) {
        self.inner.refetch().await;
    }

    /// Notified whenever the section value changes.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.inner.content.subscribe()
    }

    /// Resolves once no fetch is in flight.
    pub async fn loaded(&self) {
        let mut status = self.inner.status.subscribe();
        // The sender lives as long as `self`, so this cannot fail.
        let _ = status.wait_for(|s| !s.loading).await;
    }
}

impl<S: Section> Drop for SectionHandle<S> {
    fn drop(&mut self) {
        self.inner.mounted.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::test_support::StubSource;
    use serde_json::json;
    use site_content_core::content::{FaqSection, HeroSection};
    use site_content_core::default_content;

    #[tokio::test]
    async fn mount_fetches_and_narrows() {
        let source = Arc::new(StubSource::with(json!({ "hero": { "title": "Fetched" } })));
        let hero = SectionHandle::<HeroSection>::mount(source.clone());

        hero.loaded().await;
        assert_eq!(hero.content().title, "Fetched");
        assert_eq!(hero.content().cta_text, default_content().hero.cta_text);
        assert_eq!(hero.error(), None);
    }

    #[tokio::test]
    async fn initial_value_skips_fetch() {
        let source = Arc::new(StubSource::default());
        let hero = SectionHandle::<HeroSection>::with_initial(
            source.clone(),
            &json!({ "hero": { "subtitle": "Server rendered" } }),
        );

        assert!(!hero.is_loading());
        assert_eq!(hero.content().subtitle, "Server rendered");
        tokio::task::yield_now().await;
        assert_eq!(source.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failure_sets_error_and_default() {
        let source = Arc::new(StubSource::with(json!({ "faq": { "title": "Ask" } })));
        let faq = SectionHandle::<FaqSection>::with_initial(source.clone(), &json!({ "faq": { "title": "Old" } }));

        source.fail(true);
        faq.refetch().await;

        assert_eq!(faq.content(), default_content().faq);
        assert!(faq.error().unwrap().contains("503"));
        assert!(!faq.is_loading());
    }

    #[tokio::test]
    async fn unrelated_change_does_not_notify() {
        let source = Arc::new(StubSource::with(json!({ "hero": { "title": "Same" } })));
        let hero = SectionHandle::<HeroSection>::with_initial(source.clone(), &json!({ "hero": { "title": "Same" } }));
        let mut rx = hero.subscribe();

        *source.stored.lock().unwrap() = Some(json!({
            "hero": { "title": "Same" },
            "faq": { "title": "Changed elsewhere" },
        }));
        hero.refetch().await;
        assert!(!rx.has_changed().unwrap());

        *source.stored.lock().unwrap() = Some(json!({ "hero": { "title": "Different" } }));
        hero.refetch().await;
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().title, "Different");
    }

    #[tokio::test]
    async fn empty_response_yields_default() {
        let source = Arc::new(StubSource::default());
        let hero = SectionHandle::<HeroSection>::with_initial(source, &json!({ "hero": { "title": "X" } }));
        hero.refetch().await;
        assert_eq!(hero.content(), default_content().hero);
    }

    #[tokio::test]
    async fn late_fetch_after_unmount_is_discarded() {
        let source = Arc::new(StubSource::with(json!({ "hero": { "title": "Late" } })));
        let hero = SectionHandle::<HeroSection>::with_initial(source, &json!({}));
        let inner = Arc::clone(&hero.inner);
        let mut rx = hero.subscribe();

        drop(hero);
        inner.refetch().await;

        assert_eq!(inner.content.borrow().title, default_content().hero.title);
        assert!(!rx.has_changed().unwrap());
    }
}
