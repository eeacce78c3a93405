use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::ContentRepository;
use crate::content::ContentDocument;
use crate::document::key::DocumentKind;
use crate::error::StoreError;

/// Process-local repository for development without a database, and tests.
#[derive(Debug, Default)]
pub struct MemoryContentRepository {
    documents: RwLock<HashMap<DocumentKind, Value>>,
}

impl MemoryContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw data, as if an older version had written it.
    pub fn with_document(kind: DocumentKind, raw: Value) -> Self {
        Self {
            documents: RwLock::new(HashMap::from([(kind, raw)])),
        }
    }
}

#[async_trait]
impl ContentRepository for MemoryContentRepository {
    async fn load(&self, kind: DocumentKind) -> Result<Option<Value>, StoreError> {
        Ok(self.documents.read().await.get(&kind).cloned())
    }

    async fn save(&self, kind: DocumentKind, content: &ContentDocument) -> Result<(), StoreError> {
        let raw = serde_json::to_value(content)?;
        self.documents.write().await.insert(kind, raw);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
