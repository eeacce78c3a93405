use std::sync::LazyLock;

use super::model::{ThemeColors, ThemeDocument, ThemeFonts};

const SYSTEM_FONT_STACK: &str =
    r#"-apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif"#;

static DEFAULT_THEME: LazyLock<ThemeDocument> = LazyLock::new(|| ThemeDocument {
    colors: ThemeColors {
        brand500: "#00abad".to_string(),
        brand600: "#008c8e".to_string(),
        accent500: "#ff6b6b".to_string(),
        bg_app: "#f5f5f7".to_string(),
        bg_secondary: "#ffffff".to_string(),
        text_main: "#1d1d1f".to_string(),
        text_secondary: "#86868b".to_string(),
    },
    fonts: ThemeFonts {
        heading: SYSTEM_FONT_STACK.to_string(),
        body: SYSTEM_FONT_STACK.to_string(),
    },
    border_radius: "xl".to_string(),
    logo: String::new(),
});

/// The theme used for any field the stored document leaves out.
pub fn default_theme() -> &'static ThemeDocument {
    &DEFAULT_THEME
}
