use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WhatsAppButtonProps {
    pub href: String,
    pub label: String,
    pub visible: bool,
}

/// Floating chat button pinned to the bottom-right corner.
#[function_component(WhatsAppButton)]
pub fn whatsapp_button(props: &WhatsAppButtonProps) -> Html {
    html! {
        <a href={props.href.clone()} target="_blank" rel="noopener" aria-label={props.label.clone()}
            class={classes!("whatsapp-float", props.visible.then(|| "whatsapp-float-visible"))}>
            <div class="whatsapp-pulse"></div>
            <div class="whatsapp-ring">
                <div class="whatsapp-core">{"💬"}</div>
            </div>
            <style>
                {r#"
                .whatsapp-float {
                    position: fixed;
                    bottom: 2.5rem;
                    right: 2.5rem;
                    z-index: 50;
                    opacity: 0;
                    transform: translateY(5rem);
                    pointer-events: none;
                    transition: all 0.7s;
                    text-decoration: none;
                }
                .whatsapp-float-visible {
                    opacity: 1;
                    transform: translateY(0);
                    pointer-events: auto;
                }
                .whatsapp-pulse {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    animation: pulse-outer 3s infinite cubic-bezier(0.4, 0, 0.2, 1);
                }
                .whatsapp-ring {
                    padding: 2px;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #fff, #666, #fff);
                    box-shadow: 0 0 40px rgba(255, 255, 255, 0.1);
                    transition: transform 0.5s;
                }
                .whatsapp-float:hover .whatsapp-ring {
                    transform: scale(1.1);
                }
                .whatsapp-core {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    background: #000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                }
                @keyframes pulse-outer {
                    0% { transform: scale(1); opacity: 0.6; }
                    70% { transform: scale(1.5); opacity: 0; }
                    100% { transform: scale(1.5); opacity: 0; }
                }
                @media (max-width: 768px) {
                    .whatsapp-float {
                        bottom: 1.5rem;
                        right: 1.5rem;
                    }
                    .whatsapp-core {
                        width: 3.5rem;
                        height: 3.5rem;
                    }
                }
                "#}
            </style>
        </a>
    }
}
