use std::rc::Rc;

use yew::prelude::*;

use crate::components::icons::Icon;
use crate::components::scroll_strip::ScrollStrip;
use crate::content::{Service, SiteContent};
use crate::state::scroll_strip::ScrollStep;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: Service,
    quote_label: String,
    quote_href: String,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class="service-card">
            <div class="service-card-inner glass-card">
                <Icon name={props.service.icon.clone()} class="service-icon chrome-text" />
                <h3>{&props.service.title}</h3>
                <p>{&props.service.description}</p>
                <a href={props.quote_href.clone()} target="_blank" rel="noopener" class="service-quote">
                    {&props.quote_label}
                </a>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let section = &props.content.services;
    let quote_href = props.content.contact.whatsapp_link();

    html! {
        <section id="servicos" class="services">
            <div class="section-inner">
                <div class="section-heading">
                    <p class="eyebrow">{&section.eyebrow}</p>
                    <h2 class="chrome-text">{&section.title}</h2>
                </div>

                <ScrollStrip step={ScrollStep::SERVICES} class="services-strip">
                    { for section.items.iter().map(|service| html! {
                        <ServiceCard
                            key={service.title.clone()}
                            service={service.clone()}
                            quote_label={section.quote_label.clone()}
                            quote_href={quote_href.clone()}
                        />
                    }) }
                </ScrollStrip>
            </div>

            <style>
                {r#"
                .services {
                    padding: 8rem 0;
                    background: #050505;
                    overflow: hidden;
                }
                .service-card {
                    position: relative;
                    padding: 1px;
                    min-width: 320px;
                    max-width: 320px;
                    background: linear-gradient(135deg, rgba(255,255,255,0.2), rgba(255,255,255,0.05), rgba(255,255,255,0.2));
                }
                .service-card-inner {
                    height: 100%;
                    padding: 3rem;
                    background: #050505;
                    display: flex;
                    flex-direction: column;
                    transition: background 0.7s;
                }
                .service-card:hover .service-card-inner {
                    background: #0a0a0a;
                }
                .service-icon {
                    font-size: 2.75rem;
                    margin-bottom: 2.5rem;
                    transition: transform 0.7s;
                }
                .service-card:hover .service-icon {
                    transform: scale(1.1);
                }
                .service-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    margin-bottom: 1.5rem;
                }
                .service-card p {
                    color: #6b7280;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    flex-grow: 1;
                }
                .service-quote {
                    margin-top: 2.5rem;
                    font-size: 0.625rem;
                    font-weight: 900;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #fff;
                    text-decoration: none;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.4);
                    align-self: flex-start;
                    opacity: 0;
                    transition: opacity 0.7s;
                }
                .service-card:hover .service-quote {
                    opacity: 1;
                }
                @media (max-width: 768px) {
                    .services {
                        padding: 5rem 0;
                    }
                    .service-card {
                        min-width: 280px;
                        max-width: 280px;
                    }
                    .service-card-inner {
                        padding: 2rem;
                    }
                    .service-quote {
                        opacity: 1;
                    }
                }
                "#}
            </style>
        </section>
    }
}
