use crate::model::Helper;
use crate::util::format_number;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HelpersPanelProps {
    pub helpers: Vec<Helper>,
    pub gold: u64,
    pub on_buy: Callback<u32>,
}

#[function_component]
pub fn HelpersPanel(props: &HelpersPanelProps) -> Html {
    let rows = props.helpers.iter().map(|h| {
        let buy_cb = {
            let cb = props.on_buy.clone();
            let id = h.id;
            Callback::from(move |_| cb.emit(id))
        };
        let affordable = props.gold >= h.cost;
        html! {
            <button key={h.id} onclick={buy_cb} disabled={!affordable}
                style={format!("padding:10px 12px; text-align:left; display:flex; flex-direction:column; gap:4px; border-left:4px solid {};", h.color)}>
                <div style="display:flex; justify-content:space-between; gap:12px; width:100%;">
                    <span style="font-weight:600;">{ h.name.clone() }</span>
                    <span style="color:#d4af37;">{ format!("🪙 {}", format_number(h.cost)) }</span>
                </div>
                <div style="display:flex; justify-content:space-between; gap:12px; width:100%; font-size:12px; opacity:0.8;">
                    <span>{ format!("DPS: {}/s", format_number(h.base_damage)) }</span>
                    <span>{ format!("👥 {}", h.count) }</span>
                </div>
                { if h.count > 0 {
                    html!{ <div style="font-size:11px; opacity:0.7;">{ format!("Total DPS: {}/s", format_number(h.dps())) }</div> }
                } else { html!{} } }
            </button>
        }
    });
    html! {<div style="flex:1; background:rgba(210,168,255,0.08); border:1px solid rgba(210,168,255,0.3); border-radius:12px; padding:12px; display:flex; flex-direction:column; gap:8px; overflow-y:auto;">
        <h3 style="margin:0; font-size:18px;">{"👥 Helpers"}</h3>
        { for rows }
    </div>}
}
