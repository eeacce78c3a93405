//! Cross-tab change signals.
//!
//! Mirrors a persistent browser key-value store: writers set a key, every
//! other open view observes the change. The theme is published under
//! [`THEME_SIGNAL_KEY`] as JSON text.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde_json::Value;
use tokio::sync::broadcast;

use crate::theme::{normalize_theme, ThemeDocument};

pub const THEME_SIGNAL_KEY: &str = "theme-updated";

/// A key changed. `new_value` is `None` when the key was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalChange {
    pub key: String,
    pub new_value: Option<String>,
}

/// Key-value store whose writes are observable by other listeners.
pub trait SignalStore: Send + Sync {
    fn set(&self, key: &str, value: String);

    fn remove(&self, key: &str);

    fn get(&self, key: &str) -> Option<String>;

    /// Stream of subsequent changes.
    fn watch(&self) -> broadcast::Receiver<SignalChange>;
}

/// Process-local [`SignalStore`].
#[derive(Debug)]
pub struct MemorySignalStore {
    values: RwLock<HashMap<String, String>>,
    changes: broadcast::Sender<SignalChange>,
}

impl MemorySignalStore {
    /// Buffer up to `capacity` unread changes per watcher; zero is raised to
    /// one.
    pub fn new(capacity: usize) -> Self {
        let (changes, _) = broadcast::channel(capacity.max(1));
        Self {
            values: RwLock::new(HashMap::new()),
            changes,
        }
    }

    fn notify(&self, key: &str, new_value: Option<String>) {
        // No listeners is fine; the value is still stored.
        let _ = self.changes.send(SignalChange {
            key: key.to_string(),
            new_value,
        });
    }
}

impl Default for MemorySignalStore {
    fn default() -> Self {
        Self::new(64)
    }
}

impl SignalStore for MemorySignalStore {
    fn set(&self, key: &str, value: String) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.clone());
        self.notify(key, Some(value));
    }

    fn remove(&self, key: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        self.notify(key, None);
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn watch(&self) -> broadcast::Receiver<SignalChange> {
        self.changes.subscribe()
    }
}

/// Publish `theme` under [`THEME_SIGNAL_KEY`].
pub fn publish_theme_signal(
    store: &dyn SignalStore,
    theme: &ThemeDocument,
) -> Result<(), serde_json::Error> {
    store.set(THEME_SIGNAL_KEY, serde_json::to_string(theme)?);
    Ok(())
}

/// Read a theme out of a change notification.
///
/// Returns `None` for other keys, removals and payloads that are not JSON.
/// Parse failures are logged and otherwise ignored.
pub fn decode_theme_signal(change: &SignalChange) -> Option<ThemeDocument> {
    if change.key != THEME_SIGNAL_KEY {
        return None;
    }
    let payload = change.new_value.as_deref()?;
    match serde_json::from_str::<Value>(payload) {
        Ok(raw) => Some(normalize_theme(&raw)),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable theme signal");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::default_theme;

    #[tokio::test]
    async fn set_is_observed() {
        let store = MemorySignalStore::default();
        let mut rx = store.watch();

        publish_theme_signal(&store, default_theme()).unwrap();

        let change = rx.recv().await.unwrap();
        assert_eq!(change.key, THEME_SIGNAL_KEY);
        assert_eq!(decode_theme_signal(&change).as_ref(), Some(default_theme()));
        assert!(store.get(THEME_SIGNAL_KEY).is_some());
    }

    #[test]
    fn garbage_payload_is_ignored() {
        let change = SignalChange {
            key: THEME_SIGNAL_KEY.to_string(),
            new_value: Some("{not json".to_string()),
        };
        assert_eq!(decode_theme_signal(&change), None);
    }

    #[test]
    fn other_keys_and_removals_are_ignored() {
        let other = SignalChange {
            key: "session".to_string(),
            new_value: Some("{}".to_string()),
        };
        let removed = SignalChange {
            key: THEME_SIGNAL_KEY.to_string(),
            new_value: None,
        };
        assert_eq!(decode_theme_signal(&other), None);
        assert_eq!(decode_theme_signal(&removed), None);
    }

    #[test]
    fn partial_payload_is_normalized() {
        let change = SignalChange {
            key: THEME_SIGNAL_KEY.to_string(),
            new_value: Some(r##"{"colors":{"accent500":"#abcdef"}}"##.to_string()),
        };
        let theme = decode_theme_signal(&change).unwrap();
        assert_eq!(theme.colors.accent500, "#abcdef");
        assert_eq!(theme.colors.brand500, default_theme().colors.brand500);
    }

    #[tokio::test]
    async fn zero_capacity_store_is_usable() {
        let store = MemorySignalStore::new(0);
        let mut rx = store.watch();
        store.set("session", "1".to_string());
        assert_eq!(rx.recv().await.unwrap().new_value.as_deref(), Some("1"));
    }
}
