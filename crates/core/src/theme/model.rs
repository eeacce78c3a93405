use serde::{Deserialize, Serialize};

/// Visual styling for the public site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
    /// One of `none`, `sm`, `md`, `lg`, `xl`, `2xl`, `full`. Not validated.
    pub border_radius: String,
    /// Logo URL, empty when unset.
    pub logo: String,
}

/// Hex colour strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub brand500: String,
    pub brand600: String,
    pub accent500: String,
    pub bg_app: String,
    pub bg_secondary: String,
    pub text_main: String,
    pub text_secondary: String,
}

/// CSS font-family stacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFonts {
    pub heading: String,
    pub body: String,
}

/// Addressable leaf of a [`ThemeDocument`] that maps onto a style variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeField {
    Brand500,
    Brand600,
    Accent500,
    BgApp,
    BgSecondary,
    TextMain,
    TextSecondary,
    HeadingFont,
    BodyFont,
    BorderRadius,
}

impl ThemeField {
    /// Dotted document path, e.g. `colors.bgApp`.
    pub fn path(&self) -> &'static str {
        match self {
            ThemeField::Brand500 => "colors.brand500",
            ThemeField::Brand600 => "colors.brand600",
            ThemeField::Accent500 => "colors.accent500",
            ThemeField::BgApp => "colors.bgApp",
            ThemeField::BgSecondary => "colors.bgSecondary",
            ThemeField::TextMain => "colors.textMain",
            ThemeField::TextSecondary => "colors.textSecondary",
            ThemeField::HeadingFont => "fonts.heading",
            ThemeField::BodyFont => "fonts.body",
            ThemeField::BorderRadius => "borderRadius",
        }
    }
}

impl ThemeDocument {
    pub fn field(&self, field: ThemeField) -> &str {
        match field {
            ThemeField::Brand500 => &self.colors.brand500,
            ThemeField::Brand600 => &self.colors.brand600,
            ThemeField::Accent500 => &self.colors.accent500,
            ThemeField::BgApp => &self.colors.bg_app,
            ThemeField::BgSecondary => &self.colors.bg_secondary,
            ThemeField::TextMain => &self.colors.text_main,
            ThemeField::TextSecondary => &self.colors.text_secondary,
            ThemeField::HeadingFont => &self.fonts.heading,
            ThemeField::BodyFont => &self.fonts.body,
            ThemeField::BorderRadius => &self.border_radius,
        }
    }
}
