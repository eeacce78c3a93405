//! Homepage content and theme: schema defaults, normalization, caching and
//! theme propagation for the agency site.

pub mod cache;
pub mod content;
pub mod document;
pub mod error;
pub mod events;
mod fallback;
pub mod repository;
pub mod service;
pub mod signal;
pub mod theme;

pub use cache::{ContentCache, CONTENT_CACHE_TTL};
pub use content::{default_content, normalize_content, ContentDocument, Section, SectionKey};
pub use document::key::DocumentKind;
pub use error::StoreError;
pub use events::bus::EventBus;
pub use events::types::SiteEvent;
pub use repository::ContentRepository;
pub use service::ContentService;
pub use signal::{MemorySignalStore, SignalStore, THEME_SIGNAL_KEY};
pub use theme::{default_theme, normalize_theme, ThemeApplier, ThemeDocument};
