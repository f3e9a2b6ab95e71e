use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MonsterPanelProps {
    pub name: String,
    pub glyph: String,
    pub is_boss: bool,
    /// Monster is at 0 HP and waiting for the next one to appear.
    pub dying: bool,
    /// `(sequence, amount)` of the latest click, re-keyed so the float animation restarts.
    pub damage_number: Option<(u64, u64)>,
    pub on_click: Callback<()>,
}

#[function_component(MonsterPanel)]
pub fn monster_panel(props: &MonsterPanelProps) -> Html {
    let click_cb = {
        let cb = props.on_click.clone();
        let dying = props.dying;
        Callback::from(move |_| {
            if !dying {
                cb.emit(());
            }
        })
    };
    let size = if props.is_boss { 180 } else { 130 };
    let body_style = if props.dying {
        "transform:rotate(540deg) translateY(60px) scale(0.2); opacity:0; transition:all 0.5s ease-in;"
    } else {
        "animation:tt-bounce 2s ease-in-out infinite; transition:transform 0.1s;"
    };
    html! {<div style="position:relative; display:flex; flex-direction:column; align-items:center; gap:8px; user-select:none;">
        <div onclick={click_cb}
            style={format!("font-size:{}px; line-height:1; cursor:{}; {}", size, if props.dying { "default" } else { "pointer" }, body_style)}>
            { props.glyph.clone() }
        </div>
        <div style={format!("font-size:16px; font-weight:600; color:{};", if props.is_boss { "#f85149" } else { "#c9d1d9" })}>{ props.name.clone() }</div>
        { if let Some((seq, amount)) = props.damage_number {
            html!{ <span key={seq} style="position:absolute; top:0; font-weight:700; color:#ff7b72; animation:tt-float 0.8s ease-out forwards; pointer-events:none;">{ format!("-{}", amount) }</span> }
        } else { html!{} } }
    </div>}
}
