pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde_json::Value;

use crate::content::ContentDocument;
use crate::document::key::DocumentKind;
use crate::error::StoreError;

pub use memory::MemoryContentRepository;
pub use postgres::PgContentRepository;

/// Persistence gateway for the singleton content document.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Raw stored data, or `None` when nothing has been saved yet.
    async fn load(&self, kind: DocumentKind) -> Result<Option<Value>, StoreError>;

    /// Replace the stored document wholesale.
    async fn save(&self, kind: DocumentKind, content: &ContentDocument) -> Result<(), StoreError>;

    /// Cheap connectivity check.
    async fn ping(&self) -> Result<(), StoreError>;
}
