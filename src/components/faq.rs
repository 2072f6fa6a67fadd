use yew::prelude::*;

use crate::content::FaqEntry;
use crate::state::accordion::{AccordionMode, AccordionState, Toggle};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    open: bool,
    on_toggle: Callback<MouseEvent>,
    map_embed_url: String,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let entry = &props.entry;
    // The iframe is only mounted while its entry is open.
    let map = if entry.show_map && props.open {
        html! {
            <div class="faq-map">
                <iframe src={props.map_embed_url.clone()} width="100%" height="100%"
                    style="border: 0" allowfullscreen=true loading="lazy" title="Mapa">
                </iframe>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={props.on_toggle.clone()} aria-expanded={props.open.to_string()}>
                <h3>{&entry.question}</h3>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <div class="faq-answer-inner">
                    <p>{&entry.answer}</p>
                    {map}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub title: String,
    pub entries: Vec<FaqEntry>,
    pub mode: AccordionMode,
    pub map_embed_url: String,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let mode = props.mode;
    let open = use_reducer(move || AccordionState::new(mode));

    html! {
        <div class="faq">
            <div class="faq-inner">
                <h2 class="chrome-text">{&props.title}</h2>
                { for props.entries.iter().enumerate().map(|(index, entry)| {
                    let on_toggle = {
                        let open = open.dispatcher();
                        Callback::from(move |_: MouseEvent| open.dispatch(Toggle(index)))
                    };
                    html! {
                        <FaqItem
                            key={index}
                            entry={entry.clone()}
                            open={open.is_open(index)}
                            on_toggle={on_toggle}
                            map_embed_url={props.map_embed_url.clone()}
                        />
                    }
                }) }
            </div>

            <style>
                {r#"
                .faq {
                    background: #050505;
                    padding: 6rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }
                .faq-inner {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .faq-inner h2 {
                    font-size: 1.875rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    padding: 1.5rem 0;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    text-align: left;
                    background: none;
                    border: none;
                    color: inherit;
                    cursor: pointer;
                    padding: 0.5rem 0;
                }
                .faq-question h3 {
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #9ca3af;
                    transition: color 0.3s;
                }
                .faq-item.open .faq-question h3,
                .faq-question:hover h3 {
                    color: #fff;
                }
                .toggle-icon {
                    color: #6b7280;
                    flex-shrink: 0;
                    margin-left: 1rem;
                }
                .faq-answer {
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.5s ease-in-out;
                }
                .faq-item.open .faq-answer {
                    max-height: 600px;
                    opacity: 1;
                    margin-top: 1.5rem;
                }
                .faq-answer-inner {
                    padding-left: 1.5rem;
                    border-left: 1px solid rgba(255, 255, 255, 0.1);
                }
                .faq-answer-inner p {
                    color: #6b7280;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    font-weight: 300;
                    margin-bottom: 1.5rem;
                }
                .faq-map {
                    width: 100%;
                    height: 250px;
                    overflow: hidden;
                    filter: grayscale(100%) invert(100%);
                    opacity: 0.7;
                    transition: opacity 0.3s;
                }
                .faq-map:hover {
                    opacity: 1;
                }
                @media (max-width: 768px) {
                    .faq {
                        padding: 4rem 0;
                    }
                    .faq-inner h2 {
                        font-size: 1.25rem;
                    }
                    .faq-question h3 {
                        font-size: 0.625rem;
                        letter-spacing: 0.15em;
                    }
                    .faq-map {
                        height: 180px;
                    }
                }
                "#}
            </style>
        </div>
    }
}
