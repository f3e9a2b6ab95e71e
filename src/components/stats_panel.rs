use crate::util::{format_number, format_time};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub gold: u64,
    pub level: u32,
    pub is_boss: bool,
    pub dps: u64,
    pub timer: u32,
    pub combo_count: u32,
    pub combo_multiplier: f64,
    pub monsters_defeated: u64,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let level_color = if props.is_boss { "#f85149" } else { "#58a6ff" };
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"🪙"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Gold"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ format_number(props.gold) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:{};", icon_style, level_color)}>{ if props.is_boss { "👑" } else { "🛡" } }</span>
                <span style={format!("{} color:{};", label_style, level_color)}>{"Level"}</span>
                <span style={format!("{} color:{};", value_style, level_color)}>
                    { props.level }
                    { if props.is_boss { html!{ <span style="margin-left:6px; font-size:11px;">{"BOSS!"}</span> } } else { html!{} } }
                </span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#3fb950;", icon_style)}>{"⚡"}</span>
                <span style={format!("{} color:#3fb950;", label_style)}>{"DPS"}</span>
                <span style={format!("{} color:#3fb950;", value_style)}>{ format_number(props.dps) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#f0883e;", icon_style)}>{"⏱"}</span>
                <span style={format!("{} color:#f0883e;", label_style)}>{"Remaining"}</span>
                <span style={format!("{} color:#f0883e;", value_style)}>{ format_time(props.timer as u64) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d2a8ff;", icon_style)}>{"✦"}</span>
                <span style={format!("{} color:#d2a8ff;", label_style)}>{"Combo"}</span>
                <span style={format!("{} color:#d2a8ff;", value_style)}>{ format!("{} (x{:.1})", props.combo_count, props.combo_multiplier) }</span>
            </div>
            <div style="font-size:11px; opacity:0.6; text-align:right;">{ format!("Monsters defeated: {}", format_number(props.monsters_defeated)) }</div>
        </div>
    }
}
