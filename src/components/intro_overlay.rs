use crate::config::INTRO_FADE_MS;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    /// "Play Now" was pressed; the overlay is fading out.
    pub starting: bool,
    pub on_play: Callback<()>,
}

#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    let play_cb = {
        let cb = props.on_play.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let fade = if props.starting { 0.0 } else { 1.0 };
    html! {
        <div style={format!("position:fixed; inset:0; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:12px; background:linear-gradient(135deg,#111827,#1e3a8a,#111827); opacity:{}; transition:opacity {}ms;", fade, INTRO_FADE_MS)}>
            <div style="animation:tt-float 6s ease-in-out infinite; text-align:center;">
                <h1 style="margin:0; font-size:56px; color:#fff; text-shadow:0 0 20px rgba(59,130,246,0.6);">{"Tap Titans"}</h1>
                <p style="margin:8px 0 40px 0; font-size:20px; color:#93c5fd;">{"Your epic journey awaits"}</p>
            </div>
            <ul style="margin:0 0 24px 0; padding:0 0 0 18px; max-width:460px; font-size:14px; line-height:1.5; color:#c9d1d9;">
                <li>{"Click the monster to damage it; rapid clicks build a combo multiplier."}</li>
                <li>{"Spend gold on click upgrades and helpers that attack every second."}</li>
                <li>{"Every 10th level is a boss worth five times the gold."}</li>
                <li>{"Run out of time and you drop a level and lose 10% of your gold."}</li>
            </ul>
            <button onclick={play_cb} disabled={props.starting}
                style="padding:20px 48px; font-size:24px; font-weight:700; color:#fff; background:linear-gradient(90deg,#2563eb,#60a5fa); border:2px solid rgba(147,197,253,0.3); border-radius:12px; cursor:pointer;">
                {"Play Now"}
            </button>
        </div>
    }
}
