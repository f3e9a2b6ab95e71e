//! Audio cues. The engine emits no sound events; cues are either played
//! directly by input handlers or derived here from observed state changes.

use web_sys::HtmlAudioElement;

use crate::model::ProgressionState;
use crate::util::clog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Background,
    Hit,
    Select,
    Cash,
    Loot,
    LevelUp,
    NotAllowed,
}

impl Cue {
    pub fn src(self) -> &'static str {
        match self {
            Cue::Background => "/mp3/background.mp3",
            Cue::Hit => "/mp3/hit.mp3",
            Cue::Select => "/mp3/select.mp3",
            Cue::Cash => "/mp3/cash.mp3",
            Cue::Loot => "/mp3/loot.mp3",
            Cue::LevelUp => "/mp3/levelup.mp3",
            Cue::NotAllowed => "/mp3/wrong.mp3",
        }
    }

    pub fn volume(self) -> f64 {
        match self {
            Cue::Background | Cue::Hit => 0.2,
            Cue::Select | Cue::Cash => 0.5,
            Cue::Loot | Cue::LevelUp | Cue::NotAllowed => 0.6,
        }
    }

    pub fn looping(self) -> bool {
        matches!(self, Cue::Background)
    }
}

/// Cues implied by going from `prev` to `next`.
pub fn cues_for_transition(prev: &ProgressionState, next: &ProgressionState) -> Vec<Cue> {
    let mut cues = Vec::new();
    if prev.current_monster_hp > 0.0 && next.current_monster_hp <= 0.0 {
        cues.push(Cue::Loot);
    }
    if next.level > prev.level {
        cues.push(Cue::LevelUp);
    } else if next.level < prev.level || (next.gold < prev.gold && next.monster_timer > prev.monster_timer) {
        // Timer regression; at level 1 only the gold penalty is visible.
        cues.push(Cue::NotAllowed);
    }
    cues
}

/// Starts playback and hands back the element so looping cues can be stopped.
pub fn play(cue: Cue, muted: bool) -> Option<HtmlAudioElement> {
    if muted {
        return None;
    }
    let el = match HtmlAudioElement::new_with_src(cue.src()) {
        Ok(el) => el,
        Err(_) => {
            clog(&format!("audio: could not create element for {:?}", cue));
            return None;
        }
    };
    el.set_volume(cue.volume());
    el.set_loop(cue.looping());
    // Autoplay may be rejected until the first user gesture; nothing to do then.
    let _ = el.play();
    Some(el)
}

pub fn stop(el: &HtmlAudioElement) {
    let _ = el.pause();
    el.set_current_time(0.0);
}
