use std::rc::Rc;

use yew::prelude::*;

use crate::config::HeroVariant;
use crate::content::SiteContent;
use crate::state::menu::{MenuAction, MenuState};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub content: Rc<SiteContent>,
    pub hero: HeroVariant,
    pub scrolled: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu = use_reducer(MenuState::default);

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    // Links keep their default action so the page still jumps to the anchor.
    let close_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    let brand = &props.content.brand;
    let leading = match props.hero {
        HeroVariant::LogoHeader => html! {
            <a href="#home" class="header-logo">
                <img src={brand.logo_url.clone()} alt={format!("Logo {}", brand.name)} />
            </a>
        },
        HeroVariant::BadgeImage => html! { <div class="header-spacer"></div> },
    };

    html! {
        <header class={classes!("site-header", props.scrolled.then(|| "scrolled"))}>
            <div class="header-content">
                {leading}

                <nav class="header-nav">
                    { for props.content.nav.iter().map(|item| html! {
                        <a key={item.href.clone()} href={item.href.clone()} class="header-link">
                            {&item.name}
                        </a>
                    }) }
                </nav>

                <div class="header-burger-slot">
                    <button class="burger-menu" onclick={toggle_menu.clone()} aria-label="Abrir Menu Principal">
                        {if menu.open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <div class={classes!("mobile-menu", menu.open.then(|| "mobile-menu-open"))}>
                <button class="mobile-menu-close" onclick={close_menu.clone()} aria-label="Fechar Menu">
                    {"✕"}
                </button>
                { for props.content.nav.iter().map(|item| html! {
                    <a key={item.href.clone()} href={item.href.clone()} class="mobile-menu-link chrome-text" onclick={close_menu.clone()}>
                        {&item.name}
                    </a>
                }) }
            </div>

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    border-bottom: 1px solid transparent;
                    transition: all 0.5s;
                }
                .site-header.scrolled {
                    padding: 1rem 0;
                    background: rgba(0, 0, 0, 0.9);
                    backdrop-filter: blur(24px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }
                .header-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .header-spacer,
                .header-logo {
                    flex: 1;
                }
                .header-logo img {
                    height: 2.5rem;
                    width: auto;
                }
                .header-nav {
                    display: flex;
                    gap: 3rem;
                }
                .header-link {
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #9ca3af;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    text-decoration: none;
                    transition: color 0.3s;
                }
                .header-link:hover {
                    color: #fff;
                }
                .header-burger-slot {
                    flex: 1;
                    display: none;
                    justify-content: flex-end;
                }
                .burger-menu {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.75rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: rgba(0, 0, 0, 0.98);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    opacity: 0;
                    transform: translateY(-100%);
                    pointer-events: none;
                    transition: all 0.7s;
                }
                .mobile-menu.mobile-menu-open {
                    opacity: 1;
                    transform: translateY(0);
                    pointer-events: auto;
                }
                .mobile-menu-close {
                    position: absolute;
                    top: 2rem;
                    right: 2rem;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 2.5rem;
                    cursor: pointer;
                }
                .mobile-menu-link {
                    font-size: 1.5rem;
                    font-weight: 300;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                    text-decoration: none;
                }
                @media (min-width: 769px) {
                    .mobile-menu {
                        display: none;
                    }
                }
                @media (max-width: 768px) {
                    .header-nav,
                    .header-spacer {
                        display: none;
                    }
                    .header-burger-slot {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
