use std::rc::Rc;

use log::debug;
use web_sys::HtmlMediaElement;
use yew::prelude::*;

use crate::config::HeroVariant;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: Rc<SiteContent>,
    pub variant: HeroVariant,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let video_src = use_state(|| None::<String>);
    let video_playing = use_state(|| false);

    // The poster paints first; the video source is only attached after mount.
    {
        let video_src = video_src.clone();
        let src = props.content.brand.hero_video.clone();
        use_effect_with_deps(
            move |_| {
                video_src.set(Some(src));
                || ()
            },
            (),
        );
    }

    // Muting through the attribute alone does not unlock autoplay on
    // script-created media elements.
    let video_ref = use_node_ref();
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |src: &Option<String>| {
                if src.is_some() {
                    if let Some(video) = video_ref.cast::<HtmlMediaElement>() {
                        video.set_muted(true);
                        if video.play().is_err() {
                            debug!("hero video refused to start");
                        }
                    }
                }
                || ()
            },
            (*video_src).clone(),
        );
    }

    let on_playing = {
        let video_playing = video_playing.clone();
        Callback::from(move |_: Event| video_playing.set(true))
    };

    let brand = &props.content.brand;
    let playing = *video_playing;

    let badge = match props.variant {
        HeroVariant::BadgeImage => html! {
            <img src={brand.badge_url.clone()} alt={format!("{} Badge", brand.name)}
                class="hero-badge animate-reveal" style="animation-delay: 0.1s" />
        },
        HeroVariant::LogoHeader => html! {},
    };

    html! {
        <section id="home" class="hero">
            <div class={classes!("hero-media", playing.then(|| "hero-media-settled"))}>
                <img src={brand.hero_image.clone()} alt={format!("{} Sorocaba", brand.name)}
                    loading="eager" decoding="async"
                    class={classes!("hero-poster", playing.then(|| "hero-poster-hidden"))} />
                {
                    if let Some(src) = (*video_src).clone() {
                        html! {
                            <video autoplay=true muted=true loop=true playsinline=true
                                poster={brand.hero_image.clone()}
                                ref={video_ref}
                                onplaying={on_playing}
                                class={classes!("hero-video", playing.then(|| "hero-video-visible"))}>
                                <source src={src} type="video/mp4" />
                            </video>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="hero-shade"></div>

            <div class="hero-content">
                <div class="hero-brand">
                    {badge}
                    <span class="hero-tagline chrome-text animate-reveal" style="animation-delay: 0.3s">
                        {&brand.tagline}
                    </span>
                </div>
                <h1 class="hero-headline chrome-text animate-reveal" style="animation-delay: 0.6s">
                    {&brand.headline}
                </h1>
                <p class="hero-lead animate-fade" style="animation-delay: 1s">{&brand.lead}</p>
                <a href={brand.cta_href.clone()} class="hero-cta chrome-button animate-fade" style="animation-delay: 1.4s">
                    {&brand.cta_label}
                </a>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #000;
                }
                .hero-media {
                    position: absolute;
                    inset: 0;
                    transform: scale(1.2);
                    transition: transform 5s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .hero-media-settled {
                    transform: scale(1);
                }
                .hero-poster,
                .hero-video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    object-position: 20% center;
                }
                .hero-poster {
                    opacity: 0.7;
                    filter: grayscale(20%);
                    transition: all 2s;
                }
                .hero-poster-hidden {
                    opacity: 0;
                    filter: blur(40px);
                }
                .hero-video {
                    opacity: 0;
                    transition: opacity 3s cubic-bezier(0.4, 0, 0.2, 1);
                }
                .hero-video-visible {
                    opacity: 0.7;
                }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: linear-gradient(to bottom, #000, rgba(0, 0, 0, 0.5), #000);
                    opacity: 0.9;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }
                .hero-brand {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    margin-bottom: 2.5rem;
                }
                .hero-badge {
                    width: 24rem;
                    max-width: 70vw;
                    height: auto;
                    margin-bottom: 1.5rem;
                    filter: drop-shadow(0 0 15px rgba(255, 255, 255, 0.3));
                }
                .hero-tagline {
                    font-size: 0.75rem;
                    font-weight: 800;
                    letter-spacing: 0.5em;
                    text-transform: uppercase;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
                    padding-bottom: 0.75rem;
                }
                .hero-headline {
                    font-size: 4.5rem;
                    font-weight: 900;
                    line-height: 1.1;
                    letter-spacing: -0.05em;
                    margin-bottom: 2.5rem;
                }
                .hero-lead {
                    max-width: 42rem;
                    margin: 0 auto 4rem;
                    font-size: 1.25rem;
                    font-weight: 300;
                    color: #d1d5db;
                    line-height: 1.6;
                }
                .hero-cta {
                    display: inline-block;
                    padding: 1.5rem 3rem;
                    font-size: 0.875rem;
                    font-weight: 900;
                    letter-spacing: 0.25em;
                    text-transform: uppercase;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .hero-headline {
                        font-size: 1.875rem;
                    }
                    .hero-lead {
                        font-size: 1rem;
                        margin-bottom: 2.5rem;
                    }
                    .hero-tagline {
                        font-size: 0.625rem;
                        letter-spacing: 0.4em;
                    }
                    .hero-cta {
                        display: block;
                        padding: 1rem 2rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
