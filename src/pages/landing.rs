use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::{
    about::About, footer::Footer, gallery::Gallery, header::Header, hero::Hero,
    services::Services, social_proof::SocialProof, whatsapp_button::WhatsAppButton,
};
use crate::config::SiteVariant;
use crate::content::SiteContent;
use crate::state::scroll_threshold::use_scrolled;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
    pub variant: SiteVariant,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let variant = props.variant;
    let header_scrolled = use_scrolled(variant.header_threshold);
    let button_visible = use_scrolled(variant.button_threshold);

    {
        let name = variant.name;
        use_effect_with_deps(
            move |_| {
                info!("Rendering {} landing page", name);
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let content = props.content.clone();

    html! {
        <div class="landing-page">
            <Header content={content.clone()} hero={variant.hero} scrolled={header_scrolled} />
            <main>
                <Hero content={content.clone()} variant={variant.hero} />
                <Services content={content.clone()} />
                <Gallery content={content.clone()} layout={variant.gallery} />
                <About content={content.clone()} />
                <SocialProof content={content.clone()} />
            </main>
            <Footer content={content.clone()} accordion={variant.accordion} />
            <WhatsAppButton
                href={content.contact.whatsapp_link()}
                label={format!("WhatsApp {}", content.brand.name)}
                visible={button_visible}
            />
        </div>
    }
}
