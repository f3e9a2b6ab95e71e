use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::audio::{self, Cue};
use crate::catalog::{MonsterCatalog, MonsterVariant};
use crate::config::{RESPAWN_DELAY_MS, TICK_INTERVAL_MS};
use crate::model::{GameAction, ProgressionState, combo_multiplier_for};
use crate::state::{ComboStep, ComboWindow, Settings};
use crate::util::clog;
use super::{
    boss_banner::BossBanner, controls_panel::ControlsPanel, health_bar::HealthBar,
    helpers_panel::HelpersPanel, monster_panel::MonsterPanel, settings_modal::SettingsModal,
    stats_panel::StatsPanel, upgrade_panel::UpgradePanel,
};

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub state: UseReducerHandle<ProgressionState>,
    pub catalog: Rc<MonsterCatalog>,
    pub settings: Settings,
    pub on_settings_change: Callback<Settings>,
    pub on_restart: Callback<()>,
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    // Interval closures outlive renders; they read the latest handle through this ref.
    let state_ref = use_mut_ref(|| props.state.clone());
    *state_ref.borrow_mut() = props.state.clone();
    let combo = use_mut_ref(ComboWindow::default);
    let variant = use_state(|| None::<MonsterVariant>);
    let damage_number = use_state(|| None::<(u64, u64)>);
    let hit_seq = use_mut_ref(|| 0_u64);
    let open_settings = use_state(|| false);

    // Tick driver: timer first, then helper damage, once per interval
    {
        let state_ref = state_ref.clone();
        let combo = combo.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let tick = Closure::wrap(Box::new(move || {
                let handle = state_ref.borrow().clone();
                handle.dispatch(GameAction::TickTimer);
                if handle.combo_count > 0 && !combo.borrow().is_live(js_sys::Date::now()) {
                    handle.dispatch(GameAction::ResetCombo);
                }
                let dps = handle.total_helper_dps();
                if dps > 0 {
                    handle.dispatch(GameAction::PassiveDamage { amount: dps });
                }
            }) as Box<dyn FnMut()>);
            let tick_id = window.as_ref().and_then(|w| {
                w.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    TICK_INTERVAL_MS as i32,
                )
                .ok()
            });
            if tick_id.is_none() {
                clog("tick driver: could not start interval");
            }
            move || {
                if let (Some(w), Some(id)) = (window, tick_id) {
                    w.clear_interval_with_handle(id);
                }
                drop(tick);
            }
        });
    }

    // Deferred respawn: one timeout per defeat ticket, never cancelled
    {
        let state = props.state.clone();
        let pending = props.state.pending_respawn().map(|p| p.ticket);
        use_effect_with(pending, move |pending| {
            if let Some(ticket) = *pending {
                let fire = Closure::once_into_js(move || {
                    state.dispatch(GameAction::Respawn { ticket });
                });
                let scheduled = web_sys::window().and_then(|w| {
                    w.set_timeout_with_callback_and_timeout_and_arguments_0(
                        fire.unchecked_ref(),
                        RESPAWN_DELAY_MS as i32,
                    )
                    .ok()
                });
                if scheduled.is_none() {
                    clog(&format!("respawn {}: could not schedule timeout", ticket));
                }
            }
            || ()
        });
    }

    // New monster variant whenever the encounter changes
    {
        let variant = variant.clone();
        let catalog = props.catalog.clone();
        let level = props.state.level;
        let is_boss = props.state.is_boss();
        let defeated = props.state.monsters_defeated;
        use_effect_with((level, defeated), move |_| {
            variant.set(
                catalog
                    .select_variant(level, is_boss, js_sys::Math::random())
                    .cloned(),
            );
            || ()
        });
    }

    // Audio cues from observed transitions
    {
        let prev = use_mut_ref(|| (*props.state).clone());
        let muted = props.settings.muted;
        use_effect_with((*props.state).clone(), move |current| {
            for cue in audio::cues_for_transition(&prev.borrow(), current) {
                audio::play(cue, muted);
            }
            *prev.borrow_mut() = current.clone();
            || ()
        });
    }

    let on_monster_click: Callback<()> = {
        let state = props.state.clone();
        let combo = combo.clone();
        let damage_number = damage_number.clone();
        let hit_seq = hit_seq.clone();
        let muted = props.settings.muted;
        let show_numbers = props.settings.show_damage_numbers;
        Callback::from(move |()| {
            // Clicks while dying are ignored here and by the reducer.
            if state.pending_respawn().is_some() || state.current_monster_hp <= 0.0 {
                return;
            }
            let combo_after = match combo.borrow_mut().register(js_sys::Date::now()) {
                ComboStep::Extend => {
                    state.dispatch(GameAction::IncreaseCombo);
                    state.combo_count + 1
                }
                ComboStep::Reset => {
                    state.dispatch(GameAction::ResetCombo);
                    0
                }
            };
            audio::play(Cue::Hit, muted);
            state.dispatch(GameAction::Click);
            if show_numbers {
                let amount = (state.click_damage as f64 * combo_multiplier_for(combo_after)).round() as u64;
                let mut seq = hit_seq.borrow_mut();
                *seq += 1;
                damage_number.set(Some((*seq, amount)));
            }
        })
    };
    let on_upgrade: Callback<()> = {
        let state = props.state.clone();
        let muted = props.settings.muted;
        Callback::from(move |()| {
            let cue = if state.can_afford_upgrade() { Cue::Cash } else { Cue::NotAllowed };
            audio::play(cue, muted);
            state.dispatch(GameAction::UpgradeClickDamage);
        })
    };
    let on_buy: Callback<u32> = {
        let state = props.state.clone();
        let muted = props.settings.muted;
        Callback::from(move |id: u32| {
            let cue = if state.can_afford_helper(id) { Cue::Cash } else { Cue::NotAllowed };
            audio::play(cue, muted);
            state.dispatch(GameAction::BuyHelper { id });
        })
    };

    // Settings callbacks
    let toggle_mute_cb: Callback<()> = {
        let settings = props.settings.clone();
        let cb = props.on_settings_change.clone();
        Callback::from(move |()| {
            cb.emit(Settings { muted: !settings.muted, ..settings.clone() })
        })
    };
    let toggle_damage_numbers_cb: Callback<()> = {
        let settings = props.settings.clone();
        let cb = props.on_settings_change.clone();
        Callback::from(move |()| {
            cb.emit(Settings { show_damage_numbers: !settings.show_damage_numbers, ..settings.clone() })
        })
    };
    let open_settings_cb: Callback<()> = {
        let open_settings = open_settings.clone();
        let muted = props.settings.muted;
        Callback::from(move |()| {
            audio::play(Cue::Select, muted);
            open_settings.set(true)
        })
    };
    let close_settings_cb: Callback<()> = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };
    let restart_cb: Callback<()> = {
        let open_settings = open_settings.clone();
        let restart = props.on_restart.clone();
        Callback::from(move |()| {
            open_settings.set(false);
            restart.emit(());
        })
    };

    let s = &*props.state;
    let (monster_name, monster_glyph) = match &*variant {
        Some(v) => (v.name.clone(), v.glyph().to_string()),
        None => ("Monster".to_string(), "👾".to_string()),
    };
    let damage_number_opt = if props.settings.show_damage_numbers { *damage_number } else { None };

    html! {<div style="position:relative; width:100vw; height:100vh; display:grid; grid-template-columns:1fr 24rem; background:#0e1116; color:#c9d1d9; overflow:hidden;">
        <div style="position:relative; display:flex; flex-direction:column; align-items:center; gap:16px; padding:0 16px 16px 16px;">
            <BossBanner show={s.is_boss()} level={s.level} />
            <div style="margin-top:16px; width:100%; display:flex; justify-content:center;">
                <HealthBar displayed_hp={s.displayed_hp()} max_hp={s.max_monster_hp} hp_percent={s.hp_percent()} timer_percent={s.timer_percent()} is_boss={s.is_boss()} />
            </div>
            <div style="flex:1; display:flex; align-items:center; justify-content:center;">
                <MonsterPanel name={monster_name} glyph={monster_glyph} is_boss={s.is_boss()} dying={s.pending_respawn().is_some()} damage_number={damage_number_opt} on_click={on_monster_click} />
            </div>
            <div style="position:absolute; left:16px; bottom:16px;">
                <StatsPanel gold={s.gold} level={s.level} is_boss={s.is_boss()} dps={s.total_helper_dps()} timer={s.monster_timer} combo_count={s.combo_count} combo_multiplier={s.combo_multiplier()} monsters_defeated={s.monsters_defeated} />
            </div>
        </div>
        <div style="display:flex; flex-direction:column; gap:12px; padding:16px; background:rgba(22,27,34,0.95); border-left:1px solid #30363d; overflow-y:auto;">
            <ControlsPanel muted={props.settings.muted} on_toggle_mute={toggle_mute_cb.clone()} on_open_settings={open_settings_cb} />
            <UpgradePanel click_damage={s.click_damage} next_click_damage={s.next_click_damage()} cost={s.upgrade_cost()} affordable={s.can_afford_upgrade()} on_upgrade={on_upgrade} />
            <HelpersPanel helpers={s.helpers.clone()} gold={s.gold} on_buy={on_buy} />
        </div>
        <SettingsModal show={*open_settings} on_close={close_settings_cb} muted={props.settings.muted} on_toggle_mute={toggle_mute_cb} show_damage_numbers={props.settings.show_damage_numbers} on_toggle_damage_numbers={toggle_damage_numbers_cb} on_restart={restart_cb} />
    </div>}
}
