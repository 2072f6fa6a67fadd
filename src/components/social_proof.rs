use std::rc::Rc;

use yew::prelude::*;

use crate::components::icons::Icon;
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct SocialProofProps {
    pub content: Rc<SiteContent>,
}

#[function_component(SocialProof)]
pub fn social_proof(props: &SocialProofProps) -> Html {
    let proof = &props.content.social_proof;

    html! {
        <section id="avaliacoes" class="social-proof">
            <div class="section-inner social-proof-inner">
                <div class="stars">
                    { for (0..proof.stars).map(|star| html! {
                        <Icon key={star} name="star" class="chrome-text" />
                    }) }
                </div>
                <h2 class="rating chrome-text">{&proof.rating}</h2>
                <p class="rating-source">{&proof.source}</p>

                <div class="testimonials">
                    { for proof.testimonials.iter().map(|review| html! {
                        <div key={review.name.clone()} class="testimonial">
                            <p>{format!("\"{}\"", review.comment)}</p>
                            <span>{&review.name}</span>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .social-proof {
                    padding: 8rem 0;
                    background: #000;
                }
                .social-proof-inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }
                .stars {
                    display: flex;
                    gap: 0.75rem;
                    font-size: 1.75rem;
                    margin-bottom: 2rem;
                }
                .rating {
                    font-size: 8rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    margin-bottom: 1rem;
                }
                .rating-source {
                    font-size: 0.875rem;
                    font-weight: 900;
                    letter-spacing: 0.4em;
                    text-transform: uppercase;
                    color: #6b7280;
                    margin-bottom: 4rem;
                }
                .testimonials {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 4rem;
                    width: 100%;
                }
                .testimonial p {
                    font-style: italic;
                    color: #9ca3af;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }
                .testimonial span {
                    font-size: 0.625rem;
                    font-weight: 900;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: rgba(255, 255, 255, 0.7);
                }
                @media (max-width: 768px) {
                    .social-proof {
                        padding: 5rem 0;
                    }
                    .rating {
                        font-size: 3.75rem;
                    }
                    .rating-source {
                        font-size: 0.625rem;
                        letter-spacing: 0.3em;
                        margin-bottom: 3rem;
                    }
                    .testimonials {
                        grid-template-columns: 1fr;
                        gap: 2.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
