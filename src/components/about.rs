use std::rc::Rc;

use yew::prelude::*;

use crate::components::icons::Icon;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: Rc<SiteContent>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let about = &props.content.about;

    html! {
        <section id="sobre-nos" class="about">
            <div class="section-inner about-grid">
                <div class="about-photo">
                    <div class="about-photo-frame">
                        <img src={about.image.clone()} alt={format!("Equipe técnica {}", props.content.brand.name)}
                            loading="lazy" decoding="async" />
                    </div>
                </div>

                <div class="about-copy">
                    <p class="eyebrow eyebrow-accent">{&about.eyebrow}</p>
                    <h2 class="chrome-text">{&about.title}</h2>
                    <p class="about-body">{&about.body}</p>

                    <div class="about-highlights">
                        { for about.highlights.iter().map(|highlight| html! {
                            <div key={highlight.title.clone()} class="about-highlight">
                                <Icon name={highlight.icon.clone()} class="about-icon" />
                                <h4>{&highlight.title}</h4>
                                <p>{&highlight.text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about {
                    padding: 8rem 0;
                    background: #050505;
                    overflow: hidden;
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                    align-items: center;
                }
                .about-photo-frame {
                    padding: 1px;
                    background: linear-gradient(135deg, rgba(255,255,255,0.2), transparent, rgba(255,255,255,0.2));
                }
                .about-photo img {
                    width: 100%;
                    height: 600px;
                    object-fit: cover;
                    filter: grayscale(100%);
                    transition: filter 1s;
                }
                .about-photo img:hover {
                    filter: none;
                }
                .about-copy h2 {
                    font-size: 3rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    line-height: 1.1;
                    margin-bottom: 2rem;
                }
                .about-body {
                    color: #9ca3af;
                    font-weight: 300;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .about-highlights {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                }
                .about-icon {
                    font-size: 1.75rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .about-highlight h4 {
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    margin: 1rem 0 0.5rem;
                }
                .about-highlight p {
                    color: #6b7280;
                    font-size: 0.75rem;
                    line-height: 1.6;
                }
                @media (max-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                    .about-photo {
                        display: none;
                    }
                    .about-copy {
                        text-align: center;
                    }
                }
                @media (max-width: 640px) {
                    .about {
                        padding: 5rem 0;
                    }
                    .about-copy h2 {
                        font-size: 1.875rem;
                    }
                    .about-highlights {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
