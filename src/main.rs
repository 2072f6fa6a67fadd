use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod timers;
mod state {
    pub mod accordion;
    pub mod auto_advance;
    pub mod carousel;
    pub mod menu;
    pub mod scroll_strip;
    pub mod scroll_threshold;
}
mod components {
    pub mod about;
    pub mod faq;
    pub mod footer;
    pub mod gallery;
    pub mod header;
    pub mod hero;
    pub mod icons;
    pub mod scroll_strip;
    pub mod services;
    pub mod social_proof;
    pub mod whatsapp_button;
}
mod pages {
    pub mod landing;
}

use config::SiteVariant;
use content::SiteContent;
use pages::landing::Landing;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/classic")]
    Classic,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn variant(&self) -> SiteVariant {
        match self {
            Route::Classic => SiteVariant::atelier(),
            Route::Home | Route::NotFound => SiteVariant::showroom(),
        }
    }
}

fn switch(route: Route, content: &Rc<SiteContent>) -> Html {
    let variant = route.variant();
    info!("Routing {:?} to the {} variant", route, variant.name);
    // Keyed so switching variants remounts every timer and reducer.
    html! { <Landing key={variant.name} content={content.clone()} variant={variant} /> }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let render = {
        let content = props.content.clone();
        Callback::from(move |route: Route| switch(route, &content))
    };

    html! {
        <BrowserRouter>
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    match SiteContent::bundled() {
        Ok(content) => {
            info!("Starting application");
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(err) => error!("Not mounting the site: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GalleryLayout, HeroVariant};
    use crate::state::accordion::AccordionMode;

    #[test]
    fn paths_pick_their_variant() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/classic"), Some(Route::Classic));

        let showroom = Route::Home.variant();
        assert_eq!(showroom.hero, HeroVariant::BadgeImage);
        assert_eq!(showroom.accordion, AccordionMode::SingleOpen);
        assert!(matches!(showroom.gallery, GalleryLayout::ScrollStrip { autoplay_ms: 4500, .. }));

        let atelier = Route::Classic.variant();
        assert_eq!(atelier.accordion, AccordionMode::MultiOpen);
        assert!(matches!(atelier.gallery, GalleryLayout::CrossFade(timing) if timing.transition_ms == 800));
    }

    #[test]
    fn unknown_paths_fall_back_to_showroom() {
        assert_eq!(Route::NotFound.variant(), SiteVariant::showroom());
    }
}
