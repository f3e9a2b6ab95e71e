use super::{game_view::GameView, intro_overlay::IntroOverlay};
use crate::audio::{self, Cue};
use crate::catalog::MonsterCatalog;
use crate::config::{GameConfig, INTRO_FADE_MS};
use crate::model::{GameAction, ProgressionState};
use crate::state::Settings;
use crate::util::clog;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlAudioElement;
use yew::prelude::*;

#[derive(PartialEq, Clone, Copy)]
enum Phase {
    Intro,
    /// Intro overlay fading out; ticking has not started yet.
    Starting,
    Playing,
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| GameConfig::default());
    let state = {
        let config = config.clone();
        use_reducer(move || ProgressionState::new(&config))
    };
    let catalog = use_memo((), |_| match MonsterCatalog::embedded() {
        Ok(c) => c,
        Err(e) => {
            clog(&format!("catalog: {}", e));
            MonsterCatalog { models: Vec::new() }
        }
    });
    let settings = use_state(Settings::load);
    let phase = use_state(|| Phase::Intro);
    let music = use_mut_ref(|| None::<HtmlAudioElement>);

    // Persist settings; background music follows the mute flag once started
    {
        let music = music.clone();
        let playing = *phase != Phase::Intro;
        use_effect_with(((*settings).clone(), playing), move |(s, playing)| {
            s.save();
            let mut slot = music.borrow_mut();
            if s.muted {
                if let Some(el) = slot.take() {
                    audio::stop(&el);
                }
            } else if *playing && slot.is_none() {
                *slot = audio::play(Cue::Background, false);
            }
            || ()
        });
    }

    let on_play: Callback<()> = {
        let phase = phase.clone();
        let music = music.clone();
        let muted = settings.muted;
        Callback::from(move |()| {
            if *phase != Phase::Intro {
                return;
            }
            // Started inside the click so autoplay policies allow it.
            if music.borrow().is_none() {
                *music.borrow_mut() = audio::play(Cue::Background, muted);
            }
            phase.set(Phase::Starting);
            let phase_done = phase.clone();
            let done = Closure::once_into_js(move || phase_done.set(Phase::Playing));
            let scheduled = web_sys::window().and_then(|w| {
                w.set_timeout_with_callback_and_timeout_and_arguments_0(
                    done.unchecked_ref(),
                    INTRO_FADE_MS as i32,
                )
                .ok()
            });
            if scheduled.is_none() {
                phase.set(Phase::Playing);
            }
        })
    };
    let on_settings_change: Callback<Settings> = {
        let settings = settings.clone();
        Callback::from(move |s: Settings| settings.set(s))
    };
    let on_restart: Callback<()> = {
        let state = state.clone();
        let config = config.clone();
        Callback::from(move |()| state.dispatch(GameAction::Restart((*config).clone())))
    };

    match *phase {
        Phase::Intro | Phase::Starting => html! {
            <IntroOverlay starting={*phase == Phase::Starting} on_play={on_play} />
        },
        Phase::Playing => html! {
            <GameView
                state={state.clone()}
                catalog={catalog.clone()}
                settings={(*settings).clone()}
                on_settings_change={on_settings_change}
                on_restart={on_restart}
            />
        },
    }
}
