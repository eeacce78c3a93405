//! Client-side access to homepage content and theme.
//!
//! [`SectionHandle`] and [`ThemeHandle`] keep a view of one section or the
//! theme current; [`ThemeColorHandle`] follows a single style variable.
//! [`ContentEditor`] is the admin save path.

pub mod color;
pub mod config;
pub mod editor;
pub mod error;
pub mod section;
pub mod source;
pub mod theme;

pub use color::{BackgroundVariant, ThemeColorHandle};
pub use config::ClientConfig;
pub use editor::ContentEditor;
pub use error::ClientError;
pub use section::{FetchStatus, SectionHandle};
pub use source::{ContentSource, HttpContentSource};
pub use theme::ThemeHandle;
