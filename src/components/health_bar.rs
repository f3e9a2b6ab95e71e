use crate::util::format_number;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HealthBarProps {
    pub displayed_hp: u64,
    pub max_hp: u64,
    pub hp_percent: f64,
    pub timer_percent: f64,
    pub is_boss: bool,
}

#[function_component(HealthBar)]
pub fn health_bar(props: &HealthBarProps) -> Html {
    let hp_fill = if props.is_boss {
        "background:linear-gradient(90deg,#dc2626,#a855f7,#dc2626);"
    } else {
        "background:linear-gradient(90deg,#ef4444,#dc2626);"
    };
    // Last fifth of the timer pulses red.
    let timer_fill = if props.timer_percent <= 20.0 {
        "background:#ef4444; animation:tt-pulse 1s infinite;"
    } else {
        "background:linear-gradient(90deg,#fb923c,#f97316);"
    };
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:12px; width:100%; max-width:560px;">
        <div style="position:relative; height:36px; background:#1c2128; border:1px solid #30363d; border-radius:8px; overflow:hidden;">
            <div style={format!("position:absolute; top:0; bottom:0; left:0; width:{:.2}%; transition:width 0.3s ease-out; {}", props.hp_percent, hp_fill)}></div>
            <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; font-weight:700; text-shadow:0 2px 2px rgba(0,0,0,0.5);">
                { format!("{} / {} HP", format_number(props.displayed_hp), format_number(props.max_hp)) }
            </div>
        </div>
        <div style="margin-top:8px; position:relative; height:8px; background:#1c2128; border:1px solid #30363d; border-radius:999px; overflow:hidden;">
            <div style={format!("position:absolute; top:0; bottom:0; left:0; width:{:.2}%; transition:width 1s linear; {}", props.timer_percent, timer_fill)}></div>
        </div>
    </div>}
}
