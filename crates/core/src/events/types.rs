use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::document::key::DocumentKind;
use crate::theme::ThemeDocument;

/// Events fanned out to in-process listeners and the theme event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SiteEvent {
    Welcome,
    /// A theme was applied. Carries the full normalized document.
    ThemeUpdated(ThemeDocument),
    ContentSaved(ContentSavedEvent),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSavedEvent {
    pub event_id: Uuid,
    pub doc_type: String,
    pub timestamp: DateTime<Utc>,
}

impl ContentSavedEvent {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            doc_type: kind.as_str().to_string(),
            timestamp: Utc::now(),
        }
    }
}
