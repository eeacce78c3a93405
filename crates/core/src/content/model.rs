use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::theme::ThemeDocument;

/// Editable homepage copy plus the embedded theme.
///
/// A normalized document always carries every section and field; see
/// [`normalize_content`](super::normalize_content).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub hero: HeroSection,
    pub services: ServicesSection,
    pub why_choose_us: WhyChooseUsSection,
    pub comparison: ComparisonSection,
    pub faq: FaqSection,
    pub cta: CtaSection,
    pub theme: ThemeDocument,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub title: String,
    /// Substring of `title` rendered with the accent treatment.
    pub title_highlight: String,
    pub subtitle: String,
    pub cta_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicesSection {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<ServiceItem>,
}

/// One tile of the services grid.
///
/// Items are stored exactly as the editor wrote them, including entries of
/// the wrong shape, so nothing is lost on a round trip. The accessors give a
/// typed reading; [`ServiceItem::col_span`] and [`ServiceItem::row_span`]
/// clamp for layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceItem(Value);

const MAX_SPAN: u8 = 3;

fn clamp_span(raw: Option<&Value>) -> u8 {
    raw.and_then(Value::as_f64)
        .map(|n| n.round().clamp(1.0, f64::from(MAX_SPAN)) as u8)
        .unwrap_or(1)
}

impl ServiceItem {
    pub fn new(title: &str, description: &str, media: &str) -> Self {
        Self(serde_json::json!({
            "title": title,
            "description": description,
            "media": media,
        }))
    }

    /// Set or replace one field. A non-object entry becomes an object first.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }
        if let Value::Object(fields) = &mut self.0 {
            fields.insert(key.to_string(), value.into());
        }
        self
    }

    /// Any field by its stored name, such as `iconColor`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.get("description").and_then(Value::as_str)
    }

    /// Image or animation URL.
    pub fn media(&self) -> Option<&str> {
        self.0.get("media").and_then(Value::as_str)
    }

    /// Grid column span in `1..=3`; anything unreadable counts as 1.
    pub fn col_span(&self) -> u8 {
        clamp_span(self.0.get("colSpan"))
    }

    /// Grid row span in `1..=3`; anything unreadable counts as 1.
    pub fn row_span(&self) -> u8 {
        clamp_span(self.0.get("rowSpan"))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for ServiceItem {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}

/// One entry of a bullet list. Usually a string, but kept verbatim when an
/// editor stored something else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point(Value);

impl Point {
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Display text: strings as written, `null` as nothing, other values in
    /// their JSON form.
    pub fn text(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Point {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}

impl From<&str> for Point {
    fn from(text: &str) -> Self {
        Self(Value::from(text))
    }
}

impl PartialEq<&str> for Point {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyChooseUsSection {
    pub title: String,
    pub title_highlight: String,
    pub subtitle: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSection {
    pub title: String,
    pub subtitle: String,
    pub traditional_points: Vec<Point>,
    pub our_points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqSection {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<FaqItem>,
}

/// One question and answer pair, stored as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaqItem(Value);

impl FaqItem {
    pub fn new(question: &str, answer: &str) -> Self {
        Self(serde_json::json!({ "question": question, "answer": answer }))
    }

    pub fn question(&self) -> Option<&str> {
        self.0.get("question").and_then(Value::as_str)
    }

    pub fn answer(&self) -> Option<&str> {
        self.0.get("answer").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for FaqItem {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaSection {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub points: Vec<Point>,
}
