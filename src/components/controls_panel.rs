use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub muted: bool,
    pub on_toggle_mute: Callback<()>,
    pub on_open_settings: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let mute_cb = {
        let cb = props.on_toggle_mute.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; gap:6px;">
        <button onclick={mute_cb} title="Toggle sound">{ if props.muted { "🔇" } else { "🔊" } }</button>
        <button onclick={settings_cb}>{"Settings"}</button>
    </div>}
}
