//! Tuning constants and the helper roster the engine is built from.

use serde::{Deserialize, Serialize};

/// Real-time interval between timer ticks and passive damage pulses.
pub const TICK_INTERVAL_MS: u32 = 1000;
/// Delay between a defeat and the next monster appearing.
pub const RESPAWN_DELAY_MS: u32 = 500;
/// Every Nth level is a boss level.
pub const BOSS_PERIOD: u32 = 10;
/// Clicks closer together than this keep the combo going.
pub const COMBO_WINDOW_MS: u32 = 1000;
/// Fade-out time of the intro screen after "Play Now".
pub const INTRO_FADE_MS: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperDef {
    pub id: u32,
    pub name: String,
    pub base_damage: u64,
    pub cost: u64,
    pub color: String,
}

impl HelperDef {
    fn new(id: u32, name: &str, base_damage: u64, cost: u64, color: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            base_damage,
            cost,
            color: color.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_click_damage: u64,
    pub starting_max_hp: u64,
    /// Seconds allowed per encounter; not varied by level.
    pub monster_timer_secs: u32,
    pub helpers: Vec<HelperDef>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_click_damage: 10,
            starting_max_hp: 100,
            monster_timer_secs: 30,
            helpers: vec![
                HelperDef::new(1, "Apprentice", 1, 10, "#4ade80"),
                HelperDef::new(2, "Warrior", 5, 50, "#f87171"),
                HelperDef::new(3, "Mage", 20, 200, "#818cf8"),
                HelperDef::new(4, "Assassin", 50, 1000, "#fb923c"),
                HelperDef::new(5, "Dragon Knight", 200, 5000, "#f472b6"),
                HelperDef::new(6, "Arch Mage", 1000, 25000, "#c084fc"),
                HelperDef::new(7, "Titan Slayer", 5000, 100000, "#fbbf24"),
            ],
        }
    }
}
