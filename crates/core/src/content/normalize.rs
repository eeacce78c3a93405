use serde_json::Value;

use super::defaults::default_content;
use super::model::{
    ComparisonSection, ContentDocument, CtaSection, FaqSection, HeroSection, ServicesSection,
    WhyChooseUsSection,
};
use crate::fallback::{list, section, text};
use crate::theme::normalize_theme;

/// Build a fully populated [`ContentDocument`] from arbitrary stored data.
///
/// Each leaf falls back to [`default_content`] on its own. A stored value
/// counts as absent when it is `null`, `false`, `0` or `""`, so an editor
/// clearing a field gets the default back rather than an empty string.
/// Lists (`items`, `points`, `traditionalPoints`, `ourPoints`) are taken as
/// a whole when present, including when empty, and never merged with the
/// default list. Their entries are kept exactly as stored. Never fails; input that is not an object yields the
/// default document.
pub fn normalize_content(raw: &Value) -> ContentDocument {
    let defaults = default_content();
    let Some(raw) = raw.as_object() else {
        return defaults.clone();
    };
    let root = Some(raw);

    let hero = section(root, "hero");
    let services = section(root, "services");
    let why = section(root, "whyChooseUs");
    let comparison = section(root, "comparison");
    let faq = section(root, "faq");
    let cta = section(root, "cta");

    ContentDocument {
        hero: HeroSection {
            title: text(hero, "title", &defaults.hero.title),
            title_highlight: text(hero, "titleHighlight", &defaults.hero.title_highlight),
            subtitle: text(hero, "subtitle", &defaults.hero.subtitle),
            cta_text: text(hero, "ctaText", &defaults.hero.cta_text),
        },
        services: ServicesSection {
            title: text(services, "title", &defaults.services.title),
            subtitle: text(services, "subtitle", &defaults.services.subtitle),
            items: list(services, "items", &defaults.services.items),
        },
        why_choose_us: WhyChooseUsSection {
            title: text(why, "title", &defaults.why_choose_us.title),
            title_highlight: text(why, "titleHighlight", &defaults.why_choose_us.title_highlight),
            subtitle: text(why, "subtitle", &defaults.why_choose_us.subtitle),
            points: list(why, "points", &defaults.why_choose_us.points),
        },
        comparison: ComparisonSection {
            title: text(comparison, "title", &defaults.comparison.title),
            subtitle: text(comparison, "subtitle", &defaults.comparison.subtitle),
            traditional_points: list(
                comparison,
                "traditionalPoints",
                &defaults.comparison.traditional_points,
            ),
            our_points: list(comparison, "ourPoints", &defaults.comparison.our_points),
        },
        faq: FaqSection {
            title: text(faq, "title", &defaults.faq.title),
            subtitle: text(faq, "subtitle", &defaults.faq.subtitle),
            items: list(faq, "items", &defaults.faq.items),
        },
        cta: CtaSection {
            title: text(cta, "title", &defaults.cta.title),
            subtitle: text(cta, "subtitle", &defaults.cta.subtitle),
            button_text: text(cta, "buttonText", &defaults.cta.button_text),
            points: list(cta, "points", &defaults.cta.points),
        },
        theme: normalize_theme(raw.get("theme").unwrap_or(&Value::Null)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn renormalize(doc: &ContentDocument) -> ContentDocument {
        normalize_content(&serde_json::to_value(doc).unwrap())
    }

    fn assert_total(doc: &ContentDocument) {
        let value = serde_json::to_value(doc).unwrap();
        let paths = [
            "/hero/title",
            "/hero/titleHighlight",
            "/hero/subtitle",
            "/hero/ctaText",
            "/services/title",
            "/services/subtitle",
            "/services/items",
            "/whyChooseUs/title",
            "/whyChooseUs/titleHighlight",
            "/whyChooseUs/subtitle",
            "/whyChooseUs/points",
            "/comparison/title",
            "/comparison/subtitle",
            "/comparison/traditionalPoints",
            "/comparison/ourPoints",
            "/faq/title",
            "/faq/subtitle",
            "/faq/items",
            "/cta/title",
            "/cta/subtitle",
            "/cta/buttonText",
            "/cta/points",
            "/theme/colors/brand500",
            "/theme/colors/brand600",
            "/theme/colors/accent500",
            "/theme/colors/bgApp",
            "/theme/colors/bgSecondary",
            "/theme/colors/textMain",
            "/theme/colors/textSecondary",
            "/theme/fonts/heading",
            "/theme/fonts/body",
            "/theme/borderRadius",
            "/theme/logo",
        ];
        for path in paths {
            let field = value.pointer(path);
            assert!(field.is_some_and(|v| !v.is_null()), "missing {path}");
        }
    }

    #[test]
    fn empty_inputs_yield_defaults() {
        for raw in [json!(null), json!({}), json!("homepage"), json!(42), json!([])] {
            let doc = normalize_content(&raw);
            assert_eq!(&doc, default_content());
            assert_total(&doc);
        }
    }

    #[test]
    fn empty_string_falls_back_to_default() {
        let doc = normalize_content(&json!({ "hero": { "title": "" } }));
        assert_eq!(doc.hero.title, default_content().hero.title);
    }

    #[test]
    fn partial_section_keeps_supplied_fields() {
        let doc = normalize_content(&json!({
            "hero": { "title": "Hello", "ctaText": 0 },
            "cta": { "buttonText": "Call us" },
        }));
        assert_eq!(doc.hero.title, "Hello");
        assert_eq!(doc.hero.cta_text, default_content().hero.cta_text);
        assert_eq!(doc.hero.subtitle, default_content().hero.subtitle);
        assert_eq!(doc.cta.button_text, "Call us");
        assert_eq!(doc.cta.points, default_content().cta.points);
    }

    #[test]
    fn provided_array_replaces_default() {
        let doc = normalize_content(&json!({ "faq": { "items": [{ "question": "Q1" }] } }));
        assert_eq!(doc.faq.items.len(), 1);
        assert_eq!(doc.faq.items[0].question(), Some("Q1"));
        assert_eq!(doc.faq.items[0].answer(), None);
        let value = serde_json::to_value(&doc.faq.items).unwrap();
        assert_eq!(value, json!([{ "question": "Q1" }]));
    }

    #[test]
    fn omitted_array_takes_whole_default() {
        let doc = normalize_content(&json!({ "faq": { "title": "Questions" } }));
        assert_eq!(doc.faq.title, "Questions");
        assert_eq!(doc.faq.items, default_content().faq.items);
    }

    #[test]
    fn empty_array_is_kept() {
        let doc = normalize_content(&json!({ "whyChooseUs": { "points": [] } }));
        assert!(doc.why_choose_us.points.is_empty());
    }

    #[test]
    fn service_items_pass_through_unvalidated() {
        let doc = normalize_content(&json!({
            "services": { "items": [{ "title": "Audit", "colSpan": "three" }] }
        }));
        assert_eq!(doc.services.items.len(), 1);
        assert_eq!(doc.services.items[0].field("colSpan"), Some(&json!("three")));
        assert_eq!(doc.services.items[0].col_span(), 1);
        assert_eq!(doc.services.items[0].media(), None);
    }

    #[test]
    fn mixed_list_entries_survive_intact() {
        let raw = json!({
            "faq": { "items": [{ "question": "Q1", "answer": 42 }, { "question": "Q2" }] },
            "cta": { "points": ["a", 1, "b"] },
            "services": { "items": [{ "title": 7, "colSpan": 2 }] },
        });
        let value = serde_json::to_value(normalize_content(&raw)).unwrap();

        assert_eq!(value["faq"]["items"], raw["faq"]["items"]);
        assert_eq!(value["cta"]["points"], raw["cta"]["points"]);
        assert_eq!(value["services"]["items"], raw["services"]["items"]);
    }

    #[test]
    fn non_object_list_records_are_kept() {
        let doc = normalize_content(&json!({ "faq": { "items": ["junk", { "question": "Q" }] } }));
        assert_eq!(doc.faq.items.len(), 2);
        assert_eq!(doc.faq.items[0].as_value(), &json!("junk"));
        assert_eq!(doc.faq.items[0].question(), None);
        assert_eq!(doc.faq.items[1].question(), Some("Q"));
    }

    #[test]
    fn embedded_theme_is_normalized() {
        let doc = normalize_content(&json!({ "theme": { "colors": { "brand500": "#112233" } } }));
        assert_eq!(doc.theme.colors.brand500, "#112233");
        assert_eq!(doc.theme.colors.brand600, default_content().theme.colors.brand600);
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let doc = normalize_content(&json!({
            "hero": { "title": "Hi", "subtitle": false },
            "services": { "items": [{ "title": "A", "iconColor": "red.500", "colSpan": null }] },
            "comparison": { "ourPoints": ["fast", 3, null] },
            "faq": { "items": [{ "question": "Q", "answer": "A" }, "junk"] },
        }));
        assert_eq!(renormalize(&doc), doc);
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i32>().prop_map(Value::from),
            "[a-z#0-9 ]{0,8}".prop_map(Value::from),
        ];
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map(
                    prop_oneof![
                        Just("hero".to_string()),
                        Just("services".to_string()),
                        Just("faq".to_string()),
                        Just("theme".to_string()),
                        Just("colors".to_string()),
                        Just("items".to_string()),
                        Just("title".to_string()),
                        Just("question".to_string()),
                        Just("points".to_string()),
                        Just("brand500".to_string()),
                        "[a-zA-Z]{1,6}",
                    ],
                    inner,
                    0..5,
                )
                .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in arb_json()) {
            let once = normalize_content(&raw);
            prop_assert_eq!(renormalize(&once), once);
        }

        #[test]
        fn normalize_is_total(raw in arb_json()) {
            assert_total(&normalize_content(&raw));
        }
    }
}
