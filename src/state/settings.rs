// Player preferences persisted to localStorage (game progress is not saved)
use serde::{Deserialize, Serialize};

use crate::util::clog;

pub const SETTINGS_KEY: &str = "tt_settings";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub muted: bool,
    pub show_damage_numbers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            show_damage_numbers: true, // default ON
        }
    }
}

impl Settings {
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(s) => s,
            Err(e) => {
                clog(&format!("settings: ignoring stored value ({})", e));
                Settings::default()
            }
        }
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                    return Self::from_json(&raw);
                }
            }
        }
        Settings::default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(s) = serde_json::to_string(self) {
                    let _ = store.set_item(SETTINGS_KEY, &s);
                }
            }
        }
    }
}
