use serde_json::Value;

use super::defaults::default_theme;
use super::model::{ThemeColors, ThemeDocument, ThemeFonts};
use crate::fallback::{section, text};

/// Build a fully populated theme from arbitrary stored data.
///
/// Every leaf falls back to [`default_theme`] independently. Never fails:
/// `null`, scalars and arrays all produce the default theme.
pub fn normalize_theme(raw: &Value) -> ThemeDocument {
    let defaults = default_theme();
    let Some(raw) = raw.as_object() else {
        return defaults.clone();
    };
    let root = Some(raw);
    let colors = section(root, "colors");
    let fonts = section(root, "fonts");

    ThemeDocument {
        colors: ThemeColors {
            brand500: text(colors, "brand500", &defaults.colors.brand500),
            brand600: text(colors, "brand600", &defaults.colors.brand600),
            accent500: text(colors, "accent500", &defaults.colors.accent500),
            bg_app: text(colors, "bgApp", &defaults.colors.bg_app),
            bg_secondary: text(colors, "bgSecondary", &defaults.colors.bg_secondary),
            text_main: text(colors, "textMain", &defaults.colors.text_main),
            text_secondary: text(colors, "textSecondary", &defaults.colors.text_secondary),
        },
        fonts: ThemeFonts {
            heading: text(fonts, "heading", &defaults.fonts.heading),
            body: text(fonts, "body", &defaults.fonts.body),
        },
        border_radius: text(root, "borderRadius", &defaults.border_radius),
        logo: text(root, "logo", &defaults.logo),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_objects_yield_default() {
        for raw in [json!(null), json!("dark"), json!(3), json!([1, 2])] {
            assert_eq!(&normalize_theme(&raw), default_theme());
        }
    }

    #[test]
    fn partial_colors_are_filled() {
        let theme = normalize_theme(&json!({
            "colors": { "brand500": "#112233", "bgApp": "" },
            "borderRadius": "2xl",
        }));
        assert_eq!(theme.colors.brand500, "#112233");
        assert_eq!(theme.colors.bg_app, default_theme().colors.bg_app);
        assert_eq!(theme.colors.text_main, default_theme().colors.text_main);
        assert_eq!(theme.fonts, default_theme().fonts);
        assert_eq!(theme.border_radius, "2xl");
    }

    #[test]
    fn unknown_border_radius_passes_through() {
        let theme = normalize_theme(&json!({ "borderRadius": "huge" }));
        assert_eq!(theme.border_radius, "huge");
    }

    #[test]
    fn logo_defaults_to_empty() {
        assert_eq!(normalize_theme(&json!({})).logo, "");
        let theme = normalize_theme(&json!({ "logo": "https://cdn.example.com/logo.svg" }));
        assert_eq!(theme.logo, "https://cdn.example.com/logo.svg");
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let once = normalize_theme(&json!({ "fonts": { "body": "Inter" }, "colors": 7 }));
        let twice = normalize_theme(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }
}
