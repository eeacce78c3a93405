pub mod defaults;
pub mod model;
pub mod normalize;
pub mod section;

pub use defaults::default_content;
pub use model::{
    ComparisonSection, ContentDocument, CtaSection, FaqItem, FaqSection, HeroSection,
    Point, ServiceItem, ServicesSection, WhyChooseUsSection,
};
pub use normalize::normalize_content;
pub use section::{Section, SectionKey};
