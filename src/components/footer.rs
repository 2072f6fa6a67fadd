use std::rc::Rc;

use yew::prelude::*;

use crate::components::faq::Faq;
use crate::content::SiteContent;
use crate::state::accordion::AccordionMode;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: Rc<SiteContent>,
    pub accordion: AccordionMode,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let content = &props.content;
    let contact = &content.contact;
    let address = &contact.address;

    html! {
        <footer id="contato" class="site-footer">
            <Faq
                title={content.faq.title.clone()}
                entries={content.faq.entries.clone()}
                mode={props.accordion}
                map_embed_url={contact.map_embed_url.clone()}
            />

            <div class="footer-inner">
                <div class="footer-brand">
                    <img src={content.brand.logo_url.clone()} alt={format!("Logo {}", content.brand.name)}
                        loading="lazy" decoding="async" />
                    <p>{&content.footer.description}</p>
                </div>

                <div class="footer-cards">
                    <div class="footer-card">
                        <h4>{"📍 Localização"}</h4>
                        <p>
                            {&address.street}<br />
                            {format!("{} - {}", address.locality, address.region)}<br />
                            {format!("CEP: {}", address.postal_code)}
                        </p>
                        <a href={contact.maps_url.clone()} target="_blank" rel="noopener" class="footer-card-link">
                            {"Ver no Google Maps"}
                        </a>
                    </div>

                    <div class="footer-card">
                        <h4>{"☎ Contato Personalizado"}</h4>
                        <p class="footer-label">{"WhatsApp"}</p>
                        <a href={contact.whatsapp_link()} target="_blank" rel="noopener" class="footer-phone">
                            {&contact.phone_display}
                        </a>
                        <div class="footer-socials">
                            <a href={contact.instagram_url.clone()} target="_blank" rel="noopener" aria-label="Instagram">
                                {"Instagram"}
                            </a>
                            <a href={contact.tiktok_url.clone()} target="_blank" rel="noopener" aria-label="TikTok">
                                {"TikTok"}
                            </a>
                        </div>
                    </div>

                    <div class="footer-card">
                        <h4>{"🕗 Horário de Atendimento"}</h4>
                        { for content.hours.iter().map(|slot| html! {
                            <div key={slot.days.clone()} class="footer-hours">
                                <span class="footer-label">{&slot.days}</span>
                                <p>{&slot.hours}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>
                        {&content.footer.copyright}
                        {" Criado por "}
                        <a href={content.footer.credit_url.clone()} target="_blank" rel="noopener">
                            {&content.footer.credit_name}
                        </a>
                        {"."}
                    </p>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #000;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 6rem 1.5rem 3rem;
                }
                .footer-brand {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    margin-bottom: 6rem;
                }
                .footer-brand img {
                    height: 4rem;
                    width: auto;
                    margin-bottom: 2rem;
                }
                .footer-brand p {
                    color: #6b7280;
                    font-size: 0.875rem;
                    font-weight: 300;
                    letter-spacing: 0.4em;
                    text-transform: uppercase;
                    text-align: center;
                    max-width: 32rem;
                    line-height: 1.7;
                }
                .footer-cards {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                    margin-bottom: 5rem;
                }
                .footer-card {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                    padding: 2.5rem;
                    transition: border-color 0.3s;
                }
                .footer-card:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                }
                .footer-card h4 {
                    font-size: 0.6875rem;
                    font-weight: 900;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    color: #9ca3af;
                    margin-bottom: 2rem;
                }
                .footer-card p {
                    color: #6b7280;
                    font-size: 0.875rem;
                    font-weight: 300;
                    line-height: 1.7;
                }
                .footer-card-link {
                    display: inline-block;
                    margin-top: 1rem;
                    font-size: 0.5625rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: inherit;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.2);
                    text-decoration: none;
                }
                .footer-label {
                    font-size: 0.5625rem;
                    color: #4b5563;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .footer-phone {
                    display: block;
                    color: #9ca3af;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                    margin-top: 0.25rem;
                }
                .footer-phone:hover {
                    color: #fff;
                }
                .footer-socials {
                    display: flex;
                    gap: 1rem;
                    padding-top: 1.5rem;
                }
                .footer-socials a {
                    padding: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #6b7280;
                    font-size: 0.75rem;
                    text-decoration: none;
                }
                .footer-socials a:hover {
                    border-color: rgba(255, 255, 255, 0.4);
                    color: #fff;
                }
                .footer-hours {
                    margin-bottom: 0.75rem;
                }
                .footer-bottom {
                    padding-top: 2.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                }
                .footer-bottom p {
                    color: #4b5563;
                    font-size: 0.5625rem;
                    font-weight: 700;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                }
                .footer-bottom a {
                    color: inherit;
                }
                @media (max-width: 768px) {
                    .footer-inner {
                        padding-top: 4rem;
                    }
                    .footer-brand {
                        margin-bottom: 5rem;
                    }
                    .footer-brand p {
                        font-size: 0.625rem;
                        letter-spacing: 0.3em;
                    }
                    .footer-cards {
                        grid-template-columns: 1fr;
                    }
                    .footer-card {
                        padding: 2rem;
                        text-align: center;
                    }
                    .footer-socials {
                        justify-content: center;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
