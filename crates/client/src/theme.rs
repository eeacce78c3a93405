use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;
use site_content_core::signal::{decode_theme_signal, SignalChange};
use site_content_core::{
    default_theme, normalize_theme, SignalStore, SiteEvent, ThemeApplier, ThemeDocument,
};
use tokio::sync::broadcast::{error::RecvError, Receiver};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::source::ContentSource;

struct ThemeInner {
    source: Arc<dyn ContentSource>,
    applier: ThemeApplier,
    theme: watch::Sender<Option<ThemeDocument>>,
    mounted: AtomicBool,
}

impl ThemeInner {
    /// Take a theme someone else already broadcast: update variables and
    /// local state, without broadcasting again.
    fn adopt(&self, theme: ThemeDocument) {
        self.applier.apply_variables(&theme);
        self.theme.send_if_modified(|current| {
            if current.as_ref() == Some(&theme) {
                return false;
            }
            *current = Some(theme);
            true
        });
    }

    async fn fetch_theme(&self) {
        let theme = match self.source.fetch().await {
            Ok(raw) => normalize_theme(
                raw.as_ref()
                    .and_then(|content| content.get("theme"))
                    .unwrap_or(&Value::Null),
            ),
            Err(err) => {
                tracing::warn!(error = %err, "theme fetch failed, using default theme");
                default_theme().clone()
            }
        };

        if !self.mounted.load(Ordering::Acquire) {
            tracing::debug!("discarding theme fetch for unmounted handle");
            return;
        }
        self.adopt(theme);
    }
}

async fn next<T: Clone>(rx: &mut Option<Receiver<T>>) -> Option<Result<T, RecvError>> {
    match rx {
        Some(rx) => Some(rx.recv().await),
        None => std::future::pending().await,
    }
}

/// Follow the event bus and the signal store until both are closed. A closed
/// source is dropped on its own so the other keeps being served.
async fn listen(
    inner: Arc<ThemeInner>,
    events: Receiver<SiteEvent>,
    changes: Receiver<SignalChange>,
) {
    let mut events = Some(events);
    let mut changes = Some(changes);

    while events.is_some() || changes.is_some() {
        tokio::select! {
            Some(event) = next(&mut events), if events.is_some() => match event {
                Ok(SiteEvent::ThemeUpdated(theme)) => inner.adopt(theme),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "theme handle lagged behind the event bus");
                }
                Err(RecvError::Closed) => {
                    tracing::debug!("event bus closed, theme handle keeps the signal store");
                    events = None;
                }
            },
            Some(change) = next(&mut changes), if changes.is_some() => match change {
                Ok(change) => {
                    if let Some(theme) = decode_theme_signal(&change) {
                        inner.adopt(theme);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "theme handle lagged behind the signal store");
                }
                Err(RecvError::Closed) => {
                    tracing::debug!("signal store closed, theme handle keeps the event bus");
                    changes = None;
                }
            },
        }
    }
}

/// Keeps the style variables and a local copy of the theme current.
///
/// Listens for `ThemeUpdated` broadcasts and for the cross-tab theme signal
/// until dropped.
pub struct ThemeHandle {
    inner: Arc<ThemeInner>,
    listener: JoinHandle<()>,
}

impl ThemeHandle {
    /// Mount the handle. With an `initial` theme (as embedded by the server)
    /// it is applied immediately; otherwise a fetch starts in the background.
    /// Must be called inside a Tokio runtime.
    pub fn mount(
        source: Arc<dyn ContentSource>,
        applier: ThemeApplier,
        signals: Arc<dyn SignalStore>,
        initial: Option<&Value>,
    ) -> Self {
        let (theme, _) = watch::channel(None);
        let events = applier.bus().subscribe();
        let changes = signals.watch();
        let inner = Arc::new(ThemeInner {
            source,
            applier,
            theme,
            mounted: AtomicBool::new(true),
        });

        let listener = tokio::spawn(listen(Arc::clone(&inner), events, changes));

        match initial {
            Some(raw) => inner.adopt(normalize_theme(raw)),
            None => {
                let fetching = Arc::clone(&inner);
                tokio::spawn(async move { fetching.fetch_theme().await });
            }
        }

        Self { inner, listener }
    }

    /// The current theme, `None` until the first one arrives.
    pub fn theme(&self) -> Option<ThemeDocument> {
        self.inner.theme.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<ThemeDocument>> {
        self.inner.theme.subscribe()
    }

    /// Normalize `raw`, apply it and broadcast it to every listener.
    pub fn apply_theme(&self, raw: &Value) {
        let theme = normalize_theme(raw);
        self.inner.applier.apply_theme(&theme);
        self.inner.adopt(theme);
    }

    /// Fetch the stored theme and apply it. Falls back to the default theme
    /// when the fetch fails.
    pub async fn fetch_theme(&self) {
        self.inner.fetch_theme().await;
    }
}

impl Drop for ThemeHandle {
    fn drop(&mut self) {
        self.inner.mounted.store(false, Ordering::Release);
        self.listener.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::test_support::StubSource;
    use serde_json::json;
    use site_content_core::signal::{publish_theme_signal, THEME_SIGNAL_KEY};
    use site_content_core::theme::StyleVariables;
    use site_content_core::{EventBus, MemorySignalStore};
    use std::time::Duration;

    fn applier() -> ThemeApplier {
        ThemeApplier::new(StyleVariables::new(), EventBus::new(16))
    }

    async fn wait_for_theme(handle: &ThemeHandle, pred: impl Fn(&ThemeDocument) -> bool) -> ThemeDocument {
        let mut rx = handle.subscribe();
        let result = tokio::time::timeout(Duration::from_secs(5), async {
            rx.wait_for(|t| t.as_ref().is_some_and(&pred)).await.unwrap().clone()
        })
        .await
        .unwrap();
        result.unwrap()
    }

    #[tokio::test]
    async fn initial_theme_is_applied_without_fetch() {
        let source = Arc::new(StubSource::default());
        let applier = applier();
        let handle = ThemeHandle::mount(
            source.clone(),
            applier.clone(),
            Arc::new(MemorySignalStore::default()),
            Some(&json!({ "colors": { "bgApp": "#101010" } })),
        );

        assert_eq!(handle.theme().unwrap().colors.bg_app, "#101010");
        assert_eq!(applier.styles().get("--color-bg-app").as_deref(), Some("#101010"));
        tokio::task::yield_now().await;
        assert_eq!(source.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn mount_without_initial_fetches() {
        let source = Arc::new(StubSource::with(json!({
            "theme": { "colors": { "brand600": "#222222" } }
        })));
        let handle = ThemeHandle::mount(
            source,
            applier(),
            Arc::new(MemorySignalStore::default()),
            None,
        );

        let theme = wait_for_theme(&handle, |t| t.colors.brand600 == "#222222").await;
        assert_eq!(theme.colors.brand500, default_theme().colors.brand500);
    }

    #[tokio::test]
    async fn failed_fetch_applies_default() {
        let source = Arc::new(StubSource::default());
        source.fail(true);
        let applier = applier();
        let handle = ThemeHandle::mount(
            source,
            applier.clone(),
            Arc::new(MemorySignalStore::default()),
            Some(&json!({ "colors": { "brand500": "#999999" } })),
        );

        handle.fetch_theme().await;
        assert_eq!(handle.theme().as_ref(), Some(default_theme()));
        assert_eq!(
            applier.styles().get("--color-brand-500"),
            Some(default_theme().colors.brand500.clone())
        );
    }

    #[tokio::test]
    async fn broadcast_reaches_every_mounted_handle() {
        let applier = applier();
        let signals: Arc<dyn SignalStore> = Arc::new(MemorySignalStore::default());
        let handles: Vec<_> = (0..3)
            .map(|_| {
                ThemeHandle::mount(
                    Arc::new(StubSource::default()),
                    applier.clone(),
                    signals.clone(),
                    Some(&json!({})),
                )
            })
            .collect();

        handles[0].apply_theme(&json!({ "colors": { "accent500": "#00ff00" } }));

        for handle in &handles {
            let theme = wait_for_theme(handle, |t| t.colors.accent500 == "#00ff00").await;
            assert_eq!(theme.colors.text_main, default_theme().colors.text_main);
        }
    }

    #[tokio::test]
    async fn cross_tab_signal_updates_handle() {
        let signals = Arc::new(MemorySignalStore::default());
        let handle = ThemeHandle::mount(
            Arc::new(StubSource::default()),
            applier(),
            signals.clone(),
            Some(&json!({})),
        );

        signals.set(THEME_SIGNAL_KEY, "not json".to_string());
        let theme = normalize_theme(&json!({ "fonts": { "heading": "Fraunces" } }));
        publish_theme_signal(signals.as_ref(), &theme).unwrap();

        let seen = wait_for_theme(&handle, |t| t.fonts.heading == "Fraunces").await;
        assert_eq!(seen, theme);
    }

    #[tokio::test]
    async fn closed_signal_store_keeps_bus_listening() {
        let applier = applier();
        let signals: Arc<dyn SignalStore> = Arc::new(MemorySignalStore::default());
        let handle = ThemeHandle::mount(
            Arc::new(StubSource::default()),
            applier.clone(),
            signals.clone(),
            Some(&json!({})),
        );

        // Dropping the only store closes the handle's change stream.
        drop(signals);
        tokio::task::yield_now().await;

        let theme = normalize_theme(&json!({ "colors": { "textMain": "#010101" } }));
        applier.apply_theme(&theme);
        let seen = wait_for_theme(&handle, |t| t.colors.text_main == "#010101").await;
        assert_eq!(seen, theme);
    }

    #[tokio::test]
    async fn drop_unsubscribes() {
        let applier = applier();
        let handle = ThemeHandle::mount(
            Arc::new(StubSource::default()),
            applier.clone(),
            Arc::new(MemorySignalStore::default()),
            Some(&json!({})),
        );
        assert_eq!(applier.bus().subscriber_count(), 1);

        drop(handle);
        tokio::time::timeout(Duration::from_secs(5), async {
            while applier.bus().subscriber_count() > 0 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();
    }
}
