use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::error::Result;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub cta_label: String,
    pub cta_href: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub slug: String,
    pub label: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PortfolioItem {
    pub title: String,
    pub category: String,
    pub image: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Stat {
    pub label: String,
    pub target: u32,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ProcessStep {
    pub title: String,
    pub body: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SiteContent {
    pub hero_slides: Vec<HeroSlide>,
    pub testimonials: Vec<Testimonial>,
    pub categories: Vec<Category>,
    pub portfolio: Vec<PortfolioItem>,
    pub stats: Vec<Stat>,
    pub process: Vec<ProcessStep>,
    pub video_id: String,
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Embedded content, or empty sections if it fails to decode.
    pub fn load() -> Self {
        match Self::parse(SITE_JSON) {
            Ok(content) => {
                debug!(
                    "Loaded content: {} slides, {} testimonials, {} portfolio items",
                    content.hero_slides.len(),
                    content.testimonials.len(),
                    content.portfolio.len()
                );
                content
            }
            Err(e) => {
                error!("{}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;

    #[test]
    fn embedded_content_decodes() {
        let content = SiteContent::parse(SITE_JSON).unwrap();
        assert!(!content.hero_slides.is_empty());
        assert!(!content.testimonials.is_empty());
        assert!(!content.video_id.is_empty());
    }

    #[test]
    fn portfolio_items_use_known_categories() {
        let content = SiteContent::parse(SITE_JSON).unwrap();
        for item in &content.portfolio {
            assert!(
                content.categories.iter().any(|c| c.slug == item.category),
                "{} has unknown category {}",
                item.title,
                item.category
            );
            assert_ne!(item.category, crate::interaction::filter::ALL);
        }
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let content = SiteContent::parse(r#"{ "video_id": "xyz" }"#).unwrap();
        assert!(content.hero_slides.is_empty());
        assert_eq!(content.video_id, "xyz");
    }

    #[test]
    fn malformed_json_is_a_content_error() {
        let err = SiteContent::parse("{ not json").unwrap_err();
        assert!(matches!(err, SiteError::Content(_)));
    }
}
