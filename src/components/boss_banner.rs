use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BossBannerProps {
    pub show: bool,
    pub level: u32,
}

#[function_component]
pub fn BossBanner(props: &BossBannerProps) -> Html {
    if !props.show {
        return html! {};
    }
    html! {<div style="width:100%; padding:10px 0; text-align:center; font-size:22px; font-weight:700; color:#fde68a; background:linear-gradient(90deg,rgba(220,38,38,0.9),rgba(147,51,234,0.9),rgba(220,38,38,0.9)); animation:tt-pulse 2s infinite;">
        { format!("★ BOSS LEVEL {} ★", props.level) }
    </div>}
}
