use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::icons::{Chevron, ChevronIcon};
use crate::state::carousel::Direction;
use crate::state::scroll_strip::{scroll_target, ScrollMetrics, ScrollStep};
use crate::timers::{BrowserScheduler, Scheduler};

fn page(track: &NodeRef, direction: Direction, step: ScrollStep) {
    let Some(track) = track.cast::<Element>() else {
        return;
    };
    let metrics = ScrollMetrics {
        offset: f64::from(track.scroll_left()),
        viewport: f64::from(track.client_width()),
        extent: f64::from(track.scroll_width()),
    };
    let target = scroll_target(metrics, direction, step);

    let options = ScrollToOptions::new();
    options.set_left(target);
    options.set_behavior(ScrollBehavior::Smooth);
    track.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct ScrollStripProps {
    pub step: ScrollStep,
    /// Pages forward on this period while mounted.
    #[prop_or_default]
    pub autoplay_ms: Option<u32>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Horizontally scrolling track with wraparound arrow controls.
#[function_component(ScrollStrip)]
pub fn scroll_strip(props: &ScrollStripProps) -> Html {
    let track = use_node_ref();

    {
        let track = track.clone();
        use_effect_with_deps(
            move |(autoplay_ms, step)| {
                let step = *step;
                let ticker = autoplay_ms.map(|period| {
                    BrowserScheduler.every(
                        period,
                        Box::new(move || page(&track, Direction::Next, step)),
                    )
                });
                move || drop(ticker)
            },
            (props.autoplay_ms, props.step),
        );
    }

    let arrow = |direction: Direction| {
        let track = track.clone();
        let step = props.step;
        Callback::from(move |_: MouseEvent| page(&track, direction, step))
    };
    let on_prev = arrow(Direction::Previous);
    let on_next = arrow(Direction::Next);

    html! {
        <div class={classes!("strip", props.class.clone())}>
            <button class="strip-arrow strip-arrow-prev chrome-button" onclick={on_prev} aria-label="Anterior">
                <ChevronIcon direction={Chevron::Left} />
            </button>
            <div class="strip-track" ref={track}>
                { for props.children.iter() }
            </div>
            <button class="strip-arrow strip-arrow-next chrome-button" onclick={on_next} aria-label="Próximo">
                <ChevronIcon direction={Chevron::Right} />
            </button>
            <style>
                {r#"
                .strip {
                    position: relative;
                }
                .strip-track {
                    display: flex;
                    gap: 2rem;
                    overflow-x: auto;
                    scroll-snap-type: x mandatory;
                    scroll-behavior: smooth;
                    scrollbar-width: none;
                    padding-bottom: 2.5rem;
                }
                .strip-track::-webkit-scrollbar {
                    display: none;
                }
                .strip-track > * {
                    scroll-snap-align: center;
                    flex-shrink: 0;
                }
                .strip-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 40;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transition: opacity 0.5s;
                }
                .strip:hover .strip-arrow {
                    opacity: 1;
                }
                .strip-arrow-prev {
                    left: 1.5rem;
                }
                .strip-arrow-next {
                    right: 1.5rem;
                }
                @media (max-width: 768px) {
                    .strip-track {
                        gap: 1rem;
                    }
                    .strip-arrow {
                        opacity: 1;
                        width: 3rem;
                        height: 3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
