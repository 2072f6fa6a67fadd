use yew::prelude::*;

/// Text glyph for an icon name used in content.
pub fn glyph(name: &str) -> &'static str {
    match name {
        "shield" => "⛨",
        "layers" => "◫",
        "sparkles" => "✦",
        "cog" => "⚙",
        "hammer" => "⚒",
        "palette" => "✎",
        "speaker" => "♫",
        "award" => "✪",
        "users" => "☷",
        "target" => "◎",
        "star" => "★",
        _ => "•",
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <span class={classes!("icon", format!("icon-{}", props.name), props.class.clone())} aria-hidden="true">
            {glyph(&props.name)}
        </span>
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum Chevron {
    Left,
    Right,
}

#[derive(Properties, PartialEq)]
pub struct ChevronProps {
    pub direction: Chevron,
    #[prop_or(24)]
    pub size: u32,
}

#[function_component(ChevronIcon)]
pub fn chevron_icon(props: &ChevronProps) -> Html {
    let points = match props.direction {
        Chevron::Left => "15 18 9 12 15 6",
        Chevron::Right => "9 18 15 12 9 6",
    };
    let size = props.size.to_string();
    html! {
        <svg width={size.clone()} height={size} viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <polyline points={points} />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::glyph;

    #[test]
    fn unknown_icons_fall_back_to_bullet() {
        assert_eq!(glyph("shield"), "⛨");
        assert_eq!(glyph("rocket"), "•");
    }
}
