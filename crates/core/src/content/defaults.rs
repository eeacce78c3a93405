use std::sync::LazyLock;

use super::model::{
    ComparisonSection, ContentDocument, CtaSection, FaqItem, FaqSection, HeroSection, Point,
    ServiceItem, ServicesSection, WhyChooseUsSection,
};
use crate::theme::default_theme;

fn points(items: &[&str]) -> Vec<Point> {
    items.iter().copied().map(Point::from).collect()
}

fn service(title: &str, description: &str, media: &str, span: (u8, u8), icon: &str) -> ServiceItem {
    ServiceItem::new(title, description, media)
        .with("colSpan", span.0)
        .with("rowSpan", span.1)
        .with("iconColor", icon)
}

fn faq(question: &str, answer: &str) -> FaqItem {
    FaqItem::new(question, answer)
}

static DEFAULT_CONTENT: LazyLock<ContentDocument> = LazyLock::new(|| ContentDocument {
    hero: HeroSection {
        title: "Explore the Future of Web".to_string(),
        title_highlight: "Future of Web".to_string(),
        subtitle: "REDgravity crafts digital experiences that are out of this world. \
                   Clean, precise, and engineered for performance."
            .to_string(),
        cta_text: "Start Mission".to_string(),
    },
    services: ServicesSection {
        title: "Our Expertise".to_string(),
        subtitle: "A comprehensive suite of digital services designed to elevate your brand."
            .to_string(),
        items: vec![
            service(
                "Web & App Development",
                "Building the foundations of your digital empire with Next.js, React, and native technologies.",
                "/service1.gif",
                (2, 2),
                "brand.500",
            ),
            service(
                "UI/UX Design",
                "Interfaces that feel as good as they look.",
                "/service2.gif",
                (1, 1),
                "accent.500",
            ),
            service(
                "Brand Strategy",
                "Crafting correct narratives.",
                "/service3.gif",
                (1, 1),
                "purple.400",
            ),
            service(
                "Performance",
                "Speed is a feature.",
                "/service4.gif",
                (1, 1),
                "green.400",
            ),
            service(
                "SEO & Growth",
                "Data-driven visibility.",
                "/service5.gif",
                (2, 1),
                "blue.400",
            ),
        ],
    },
    why_choose_us: WhyChooseUsSection {
        title: "Why leading brands choose REDgravity.".to_string(),
        title_highlight: "REDgravity".to_string(),
        subtitle: "We don't just write code; we engineer experiences. Our obsessive attention \
                   to detail and performance optimization ensures your digital product stands \
                   out in a crowded market."
            .to_string(),
        points: points(&[
            "Apple-inspired design philosophy",
            "Performance-first engineering",
            "Conversion-focused user flows",
            "Scalable & maintainable code",
        ]),
    },
    comparison: ComparisonSection {
        title: "The Difference is Clear".to_string(),
        subtitle: "Stop settling for average. Upgrade to premium.".to_string(),
        traditional_points: points(&[
            "Generic, template designs",
            "Slow loading & unoptimized",
            "Cluttered user experience",
            "Poor communication",
        ]),
        our_points: points(&[
            "Custom, high-end aesthetics",
            "Blazing fast load times",
            "Intuitive, fluid animations",
            "Strategic growth partnership",
        ]),
    },
    faq: FaqSection {
        title: "Common Questions".to_string(),
        subtitle: "Everything you need to know about working with us.".to_string(),
        items: vec![
            faq(
                "What makes REDgravity different?",
                "We focus on 'Premium' in every sense. Not just how it looks, but how it feels \
                 and performs. We combine high-end aesthetic sensibilities with rigorous \
                 engineering standards.",
            ),
            faq(
                "Do you work with startups?",
                "Yes, we love working with ambitious visionaries, whether they are just starting \
                 out with a disruptive idea or are an established brand looking to modernize.",
            ),
            faq(
                "How long does a project take?",
                "It varies, but a typical high-end landing page takes 2-4 weeks, while complex \
                 web applications can take 2-4 months.",
            ),
            faq(
                "What is your pricing model?",
                "We provide a detailed fixed-price proposal after understanding your specific \
                 needs. No hidden surprises.",
            ),
        ],
    },
    cta: CtaSection {
        title: "Ready to Transform Your Business with REDgravity?".to_string(),
        subtitle: "Your Trusted Partner for Transformative Digital Solutions".to_string(),
        button_text: "Book a Call today!".to_string(),
        points: points(&[
            "Premium Quality Guaranteed",
            "Fast Turnaround Times",
            "Dedicated Support Team",
            "Scalable Solutions",
        ]),
    },
    theme: default_theme().clone(),
});

/// The content served when nothing is stored, and the per-field fallback
/// for partially stored documents.
pub fn default_content() -> &'static ContentDocument {
    &DEFAULT_CONTENT
}
