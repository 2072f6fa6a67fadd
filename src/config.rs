use log::Level;

use crate::state::accordion::AccordionMode;
use crate::state::auto_advance::CarouselTiming;
use crate::state::scroll_strip::ScrollStep;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose carousel/timer logs while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroVariant {
    /// Badge artwork above the headline, empty header bar.
    BadgeImage,
    /// Logo in the header bar, plain headline in the hero.
    LogoHeader,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GalleryLayout {
    /// Horizontally scrolling strip paged by viewport fractions.
    ScrollStrip { autoplay_ms: u32, step: ScrollStep },
    /// One image at a time with dot selectors.
    CrossFade(CarouselTiming),
}

/// Everything that differs between the two page variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteVariant {
    pub name: &'static str,
    pub hero: HeroVariant,
    pub accordion: AccordionMode,
    pub gallery: GalleryLayout,
    pub header_threshold: f64,
    pub button_threshold: f64,
}

impl SiteVariant {
    pub fn showroom() -> Self {
        SiteVariant {
            name: "showroom",
            hero: HeroVariant::BadgeImage,
            accordion: AccordionMode::SingleOpen,
            gallery: GalleryLayout::ScrollStrip {
                autoplay_ms: 4500,
                step: ScrollStep::GALLERY,
            },
            header_threshold: 80.0,
            button_threshold: 80.0,
        }
    }

    pub fn atelier() -> Self {
        SiteVariant {
            name: "atelier",
            hero: HeroVariant::LogoHeader,
            accordion: AccordionMode::MultiOpen,
            gallery: GalleryLayout::CrossFade(CarouselTiming {
                autoplay_ms: Some(6000),
                transition_ms: 800,
            }),
            header_threshold: 80.0,
            button_threshold: 300.0,
        }
    }
}
