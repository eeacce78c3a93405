pub mod apply;
pub mod colors;
pub mod defaults;
pub mod model;
pub mod normalize;

pub use apply::{inline_theme_script, StyleVariables, ThemeApplier, CSS_VARIABLE_MAP};
pub use defaults::default_theme;
pub use model::{ThemeColors, ThemeDocument, ThemeField, ThemeFonts};
pub use normalize::normalize_theme;
