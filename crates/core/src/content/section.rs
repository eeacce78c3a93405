use super::defaults::default_content;
use super::model::{
    ComparisonSection, ContentDocument, CtaSection, FaqSection, HeroSection, ServicesSection,
    WhyChooseUsSection,
};
use crate::theme::ThemeDocument;

/// Top-level key of a [`ContentDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Hero,
    Services,
    WhyChooseUs,
    Comparison,
    Faq,
    Cta,
    Theme,
}

impl SectionKey {
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Hero,
        SectionKey::Services,
        SectionKey::WhyChooseUs,
        SectionKey::Comparison,
        SectionKey::Faq,
        SectionKey::Cta,
        SectionKey::Theme,
    ];

    /// JSON key of the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::Services => "services",
            SectionKey::WhyChooseUs => "whyChooseUs",
            SectionKey::Comparison => "comparison",
            SectionKey::Faq => "faq",
            SectionKey::Cta => "cta",
            SectionKey::Theme => "theme",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// A section type that can be narrowed out of a [`ContentDocument`].
pub trait Section: Clone + PartialEq + Send + Sync + 'static {
    const KEY: SectionKey;

    fn select(content: &ContentDocument) -> &Self;

    /// The section as it appears in the default document.
    fn default_value() -> Self {
        Self::select(default_content()).clone()
    }
}

macro_rules! impl_section {
    ($ty:ty, $key:ident, $field:ident) => {
        impl Section for $ty {
            const KEY: SectionKey = SectionKey::$key;

            fn select(content: &ContentDocument) -> &Self {
                &content.$field
            }
        }
    };
}

impl_section!(HeroSection, Hero, hero);
impl_section!(ServicesSection, Services, services);
impl_section!(WhyChooseUsSection, WhyChooseUs, why_choose_us);
impl_section!(ComparisonSection, Comparison, comparison);
impl_section!(FaqSection, Faq, faq);
impl_section!(CtaSection, Cta, cta);
impl_section!(ThemeDocument, Theme, theme);
