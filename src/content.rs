//! Page copy and media references.
//!
//! Everything a visitor reads lives in `content/site.json`, bundled into the
//! binary and parsed once at start-up.

use serde::Deserialize;
use thiserror::Error;

const BUNDLED: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("gallery has no items")]
    EmptyGallery,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<NavItem>,
    pub services: ServicesSection,
    pub gallery: GallerySection,
    pub about: AboutSection,
    pub social_proof: SocialProof,
    pub faq: FaqSection,
    pub contact: Contact,
    pub hours: Vec<OpeningHours>,
    pub footer: FooterCopy,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub logo_url: String,
    pub badge_url: String,
    pub hero_image: String,
    pub hero_video: String,
    pub tagline: String,
    pub headline: String,
    pub lead: String,
    pub cta_label: String,
    pub cta_href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ServicesSection {
    pub eyebrow: String,
    pub title: String,
    pub quote_label: String,
    pub items: Vec<Service>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    /// Suffix of the `icon-*` CSS class.
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GallerySection {
    pub eyebrow: String,
    pub title: String,
    pub follow_label: String,
    pub items: Vec<GalleryItem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GalleryItem {
    pub image: String,
    pub title: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AboutSection {
    pub eyebrow: String,
    pub title: String,
    pub body: String,
    pub image: String,
    pub highlights: Vec<Highlight>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialProof {
    pub rating: String,
    pub stars: u8,
    pub source: String,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub comment: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FaqSection {
    pub title: String,
    pub entries: Vec<FaqEntry>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    /// Reveal the location map under the answer while open.
    #[serde(default)]
    pub show_map: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contact {
    pub phone_display: String,
    /// Digits only, country code first.
    pub whatsapp_number: String,
    pub whatsapp_message: String,
    pub instagram_url: String,
    pub tiktok_url: String,
    pub maps_url: String,
    pub map_embed_url: String,
    pub address: Address,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Address {
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OpeningHours {
    pub days: String,
    pub hours: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FooterCopy {
    pub description: String,
    pub copyright: String,
    pub credit_name: String,
    pub credit_url: String,
}

impl SiteContent {
    pub fn bundled() -> Result<Self, ContentError> {
        Self::parse(BUNDLED)
    }

    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(json)?;
        if content.gallery.items.is_empty() {
            return Err(ContentError::EmptyGallery);
        }
        Ok(content)
    }
}
