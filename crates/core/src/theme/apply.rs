use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::{Arc, PoisonError, RwLock};

use super::colors::hex_to_rgba;
use super::model::{ThemeDocument, ThemeField};
use crate::events::bus::EventBus;
use crate::events::types::SiteEvent;

/// Style variable written for each theme field.
pub const CSS_VARIABLE_MAP: [(&str, ThemeField); 10] = [
    ("--color-brand-500", ThemeField::Brand500),
    ("--color-brand-600", ThemeField::Brand600),
    ("--color-accent-500", ThemeField::Accent500),
    ("--color-bg-app", ThemeField::BgApp),
    ("--color-bg-secondary", ThemeField::BgSecondary),
    ("--color-text-main", ThemeField::TextMain),
    ("--color-text-secondary", ThemeField::TextSecondary),
    ("--font-heading", ThemeField::HeadingFont),
    ("--font-body", ThemeField::BodyFont),
    ("--border-radius", ThemeField::BorderRadius),
];

/// Alias of the brand colour kept for older stylesheets.
pub const PRIMARY_COLOR_VARIABLE: &str = "--color-primary";

/// Translucent brand tint for glass surfaces.
pub const BRAND_SOFT_VARIABLE: &str = "--color-brand-soft";
const BRAND_SOFT_ALPHA: f32 = 0.1;

/// Global style variable state shared by everything that renders themed
/// values. Cloning shares the same underlying table.
#[derive(Debug, Clone, Default)]
pub struct StyleVariables {
    values: Arc<RwLock<BTreeMap<String, String>>>,
}

impl StyleVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a variable, if it has been written.
    pub fn get(&self, name: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write every mapped field of `theme`, one variable per field.
    pub fn write_theme(&self, theme: &ThemeDocument) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        for (name, field) in CSS_VARIABLE_MAP {
            values.insert(name.to_string(), theme.field(field).to_string());
        }
        values.insert(
            PRIMARY_COLOR_VARIABLE.to_string(),
            theme.colors.brand500.clone(),
        );
        values.insert(
            BRAND_SOFT_VARIABLE.to_string(),
            hex_to_rgba(&theme.colors.brand500, BRAND_SOFT_ALPHA),
        );
    }

    /// Render the table as a `:root` rule.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.snapshot() {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

/// Pushes themes into [`StyleVariables`] and tells subscribers about it.
#[derive(Debug, Clone)]
pub struct ThemeApplier {
    styles: StyleVariables,
    bus: EventBus,
}

impl ThemeApplier {
    pub fn new(styles: StyleVariables, bus: EventBus) -> Self {
        Self { styles, bus }
    }

    pub fn styles(&self) -> &StyleVariables {
        &self.styles
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Write the theme's style variables and broadcast `ThemeUpdated` with
    /// the full document.
    pub fn apply_theme(&self, theme: &ThemeDocument) {
        self.styles.write_theme(theme);
        match self.bus.publish(SiteEvent::ThemeUpdated(theme.clone())) {
            Ok(receivers) => tracing::debug!(receivers, "theme broadcast"),
            Err(_) => tracing::debug!("theme applied with no subscribers"),
        }
    }

    /// Write the style variables without broadcasting. Used by listeners
    /// reacting to a broadcast they received.
    pub fn apply_variables(&self, theme: &ThemeDocument) {
        self.styles.write_theme(theme);
    }
}

/// Script tag that seeds `window.__THEME_DATA__` before any client fetch,
/// so first paint uses the stored theme.
pub fn inline_theme_script(theme: &ThemeDocument) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(theme)?.replace("</", "<\\/");
    Ok(format!("<script>window.__THEME_DATA__ = {json};</script>"))
}
