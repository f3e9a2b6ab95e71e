use crate::util::format_number;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UpgradePanelProps {
    pub click_damage: u64,
    pub next_click_damage: u64,
    pub cost: u64,
    pub affordable: bool,
    pub on_upgrade: Callback<()>,
}

#[function_component]
pub fn UpgradePanel(props: &UpgradePanelProps) -> Html {
    let upgrade_cb = {
        let cb = props.on_upgrade.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="background:rgba(88,166,255,0.08); border:1px solid rgba(88,166,255,0.3); border-radius:12px; padding:12px; display:flex; flex-direction:column; gap:10px;">
        <h3 style="margin:0; font-size:18px;">{"⚔ Upgrades"}</h3>
        <button onclick={upgrade_cb} disabled={!props.affordable} style="padding:10px 12px; text-align:left; display:flex; flex-direction:column; gap:4px;">
            <div style="display:flex; justify-content:space-between; gap:12px; width:100%;">
                <span style="font-weight:600;">{"Upgrade Click Damage"}</span>
                <span style="color:#d4af37;">{ format!("🪙 {}", format_number(props.cost)) }</span>
            </div>
            <div style="font-size:12px; opacity:0.8;">
                { format!("Current: {} → Next: {}", format_number(props.click_damage), format_number(props.next_click_damage)) }
            </div>
        </button>
    </div>}
}
