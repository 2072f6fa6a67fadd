use std::num::NonZeroUsize;
use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::components::icons::{Chevron, ChevronIcon};
use crate::components::scroll_strip::ScrollStrip;
use crate::config::GalleryLayout;
use crate::content::{GalleryItem, SiteContent};
use crate::state::auto_advance::{AutoCarousel, CarouselTiming};
use crate::state::carousel::{CarouselView, Direction};
use crate::timers::BrowserScheduler;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    item: GalleryItem,
    #[prop_or_default]
    priority: bool,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let item = &props.item;
    html! {
        <div class="project-card">
            <div class="project-shade"></div>
            <img src={item.image.clone()} alt={item.title.clone()} decoding="async"
                loading={if props.priority { "eager" } else { "lazy" }} />
            <div class="project-caption">
                {
                    if item.caption.is_empty() {
                        html! {}
                    } else {
                        html! { <p class="project-car">{&item.caption}</p> }
                    }
                }
                <h4 class="chrome-text">{&item.title}</h4>
                <div class="project-rule"></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CrossFadeProps {
    items: Vec<GalleryItem>,
    timing: CarouselTiming,
}

/// One picture at a time; arrows and dots drive an [`AutoCarousel`].
#[function_component(CrossFade)]
fn cross_fade(props: &CrossFadeProps) -> Html {
    let view = use_state(CarouselView::default);
    let carousel = use_mut_ref(|| None::<AutoCarousel<BrowserScheduler>>);

    {
        let carousel = carousel.clone();
        let on_change = {
            let view = view.setter();
            Callback::from(move |next: CarouselView| view.set(next))
        };
        use_effect_with_deps(
            move |(len, timing)| {
                match NonZeroUsize::new(*len) {
                    Some(len) => {
                        let mounted =
                            AutoCarousel::mount(BrowserScheduler, len, *timing, on_change.clone());
                        // A remount starts over at the first picture.
                        on_change.emit(mounted.view());
                        *carousel.borrow_mut() = Some(mounted);
                    }
                    None => warn!("gallery carousel has nothing to show"),
                }
                move || {
                    let released = carousel.borrow_mut().take();
                    drop(released);
                }
            },
            (props.items.len(), props.timing),
        );
    }

    let step = |direction: Direction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(carousel) = carousel.borrow().as_ref() {
                carousel.advance(direction);
            }
        })
    };
    let on_prev = step(Direction::Previous);
    let on_next = step(Direction::Next);

    let current = view.index.min(props.items.len().saturating_sub(1));

    html! {
        <div class={classes!("crossfade", view.transitioning.then(|| "crossfade-moving"))}>
            <div class="crossfade-stage">
                { for props.items.iter().enumerate().map(|(index, item)| html! {
                    <div key={index} class={classes!("crossfade-slide", (index == current).then(|| "active"))}>
                        <ProjectCard item={item.clone()} priority={index == 0} />
                    </div>
                }) }
            </div>

            <button class="crossfade-arrow crossfade-prev chrome-button" onclick={on_prev} aria-label="Anterior">
                <ChevronIcon direction={Chevron::Left} size={32} />
            </button>
            <button class="crossfade-arrow crossfade-next chrome-button" onclick={on_next} aria-label="Próximo">
                <ChevronIcon direction={Chevron::Right} size={32} />
            </button>

            <div class="crossfade-dots">
                { for (0..props.items.len()).map(|index| {
                    let carousel = carousel.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        if let Some(carousel) = carousel.borrow().as_ref() {
                            carousel.jump_to(index);
                        }
                    });
                    html! {
                        <button key={index} onclick={onclick}
                            class={classes!("crossfade-dot", (index == current).then(|| "active"))}
                            aria-label={format!("Foto {}", index + 1)}>
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub content: Rc<SiteContent>,
    pub layout: GalleryLayout,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let section = &props.content.gallery;

    let body = match props.layout {
        GalleryLayout::ScrollStrip { autoplay_ms, step } => html! {
            <ScrollStrip step={step} autoplay_ms={Some(autoplay_ms)} class="gallery-strip">
                { for section.items.iter().enumerate().map(|(index, item)| html! {
                    <ProjectCard key={index} item={item.clone()} priority={index == 0} />
                }) }
            </ScrollStrip>
        },
        GalleryLayout::CrossFade(timing) => html! {
            <CrossFade items={section.items.clone()} timing={timing} />
        },
    };

    html! {
        <section id="galeria" class="gallery">
            <div class="section-inner section-heading">
                <p class="eyebrow">{&section.eyebrow}</p>
                <h2 class="chrome-text">{&section.title}</h2>
            </div>

            <div class="gallery-body">{body}</div>

            <div class="section-inner gallery-follow">
                <a href={props.content.contact.instagram_url.clone()} target="_blank" rel="noopener"
                    class="chrome-button gallery-follow-link">
                    {&section.follow_label}
                </a>
            </div>

            <style>
                {r#"
                .gallery {
                    padding: 8rem 0;
                    background: #000;
                    overflow: hidden;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .gallery-strip .strip-track {
                    padding-left: max(1.5rem, calc((100vw - 1280px) / 2));
                    padding-right: 1.5rem;
                }
                .project-card {
                    position: relative;
                    width: 380px;
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }
                .project-card img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(40%);
                    transition: all 1s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .project-card:hover img {
                    filter: none;
                    transform: scale(1.1);
                }
                .project-shade {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                    background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.4), transparent);
                    opacity: 0.8;
                }
                .project-caption {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    padding: 2.5rem;
                    z-index: 30;
                }
                .project-car {
                    font-size: 0.625rem;
                    font-weight: 700;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.5);
                    margin-bottom: 0.75rem;
                }
                .project-caption h4 {
                    font-size: 1.5rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }
                .project-rule {
                    width: 2.5rem;
                    height: 1px;
                    background: rgba(255, 255, 255, 0.2);
                    transition: all 1s;
                }
                .project-card:hover .project-rule {
                    width: 100%;
                    background: rgba(255, 255, 255, 0.4);
                }
                .crossfade {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .crossfade-stage {
                    position: relative;
                    height: min(80vh, 720px);
                }
                .crossfade-slide {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    transition: opacity 0.8s ease-in-out;
                    pointer-events: none;
                }
                .crossfade-slide.active {
                    opacity: 1;
                    pointer-events: auto;
                }
                .crossfade-slide .project-card {
                    width: 100%;
                    height: 100%;
                    aspect-ratio: auto;
                }
                .crossfade-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 40;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .crossfade-prev {
                    left: 3rem;
                }
                .crossfade-next {
                    right: 3rem;
                }
                .crossfade-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 2rem;
                }
                .crossfade-dot {
                    width: 0.625rem;
                    height: 0.625rem;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.2);
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .crossfade-dot.active {
                    background: #fff;
                    width: 2rem;
                    border-radius: 0.3125rem;
                }
                .gallery-follow {
                    display: flex;
                    justify-content: center;
                    margin-top: 3rem;
                }
                .gallery-follow-link {
                    padding: 1.25rem 3rem;
                    font-size: 0.75rem;
                    font-weight: 900;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .gallery {
                        padding: 6rem 0;
                    }
                    .project-card {
                        width: 280px;
                    }
                    .crossfade-prev {
                        left: 1.5rem;
                    }
                    .crossfade-next {
                        right: 1.5rem;
                    }
                    .crossfade-arrow {
                        width: 3rem;
                        height: 3rem;
                    }
                    .gallery-follow-link {
                        width: 100%;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </section>
    }
}
