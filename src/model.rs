//! Core progression model for Tap Titans.
//! Owns the monster encounter, the gold economy and the helper roster.
//! Every mutation goes through a `ProgressionState` method; the yew reducer
//! below is a thin dispatch layer over them.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::config::{BOSS_PERIOD, GameConfig};
use crate::util::clog;

pub fn is_boss_level(level: u32) -> bool {
    level % BOSS_PERIOD == 0
}

/// `floor(value * num / den)` without intermediate overflow, saturating at `u64::MAX`.
fn mul_div(value: u64, num: u64, den: u64) -> u64 {
    let wide = value as u128 * num as u128 / den as u128;
    u64::try_from(wide).unwrap_or(u64::MAX)
}

/// Max HP of the next level: x5 into a boss level, x1.2 otherwise (floored).
pub fn scale_hp_up(max_hp: u64, next_is_boss: bool) -> u64 {
    if next_is_boss {
        mul_div(max_hp, 5, 1)
    } else {
        mul_div(max_hp, 6, 5)
    }
}

/// Approximate inverse of `scale_hp_up`, applied to whatever max HP is current.
/// Repeated regressions drift away from the HP the level originally had.
pub fn scale_hp_down(max_hp: u64, prev_is_boss: bool) -> u64 {
    let hp = if prev_is_boss {
        max_hp / 5
    } else {
        mul_div(max_hp, 5, 6)
    };
    hp.max(1)
}

/// `1 + combo_count * 0.1`, computed so that e.g. 3 hits give exactly `1.3`.
pub fn combo_multiplier_for(combo_count: u32) -> f64 {
    (10 + combo_count) as f64 / 10.0
}

/// `floor(max_hp * 0.1 * boss_mult * (1 + combo * 0.1))`, in exact integer form.
pub fn gold_reward(max_hp: u64, is_boss: bool, combo_count: u32) -> u64 {
    let boss_mult: u128 = if is_boss { 5 } else { 1 };
    let wide = max_hp as u128 * boss_mult * (10 + combo_count as u128) / 100;
    u64::try_from(wide).unwrap_or(u64::MAX)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Helper {
    pub id: u32,
    pub name: String,
    /// Damage per second contributed by each owned unit.
    pub base_damage: u64,
    /// Price of the next unit; only ever rises.
    pub cost: u64,
    pub count: u32,
    pub color: String,
}

impl Helper {
    pub fn dps(&self) -> u64 {
        self.base_damage.saturating_mul(self.count as u64)
    }
}

/// Next-level values captured at the moment of a defeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespawnPayload {
    pub ticket: u64,
    pub gold_earned: u64,
    pub next_level: u32,
    pub next_max_hp: u64,
}

impl RespawnPayload {
    pub fn next_is_boss(&self) -> bool {
        is_boss_level(self.next_level)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encounter {
    /// Monster alive and accepting damage.
    Active,
    /// Monster at 0 HP; the payload is applied once the respawn delay elapses.
    PendingRespawn(RespawnPayload),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DamageOutcome {
    /// Nothing applied (no damage, or the monster is already down).
    Ignored,
    Hit { dealt: f64 },
    Defeated(RespawnPayload),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Bought { spent: u64 },
    InsufficientGold { cost: u64 },
    UnknownHelper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerOutcome {
    Counted { remaining: u32 },
    /// Time ran out; the encounter regressed to `level`.
    Expired { level: u32 },
    /// Timer is at zero but a respawn is already on its way.
    HeldForRespawn,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressionState {
    pub level: u32,
    pub gold: u64,
    pub click_damage: u64,
    pub monsters_defeated: u64,
    /// Not floored: combo multipliers produce fractional damage.
    pub current_monster_hp: f64,
    pub max_monster_hp: u64,
    pub monster_timer: u32,
    pub max_monster_timer: u32,
    pub combo_count: u32,
    /// Definition order; never grows or shrinks during a session.
    pub helpers: Vec<Helper>,
    pub encounter: Encounter,
    next_ticket: u64,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl ProgressionState {
    pub fn new(cfg: &GameConfig) -> Self {
        let helpers = cfg
            .helpers
            .iter()
            .map(|d| Helper {
                id: d.id,
                name: d.name.clone(),
                base_damage: d.base_damage,
                cost: d.cost,
                count: 0,
                color: d.color.clone(),
            })
            .collect();
        let max_hp = cfg.starting_max_hp.max(1);
        Self {
            level: 1,
            gold: 0,
            click_damage: cfg.starting_click_damage.max(1),
            monsters_defeated: 0,
            current_monster_hp: max_hp as f64,
            max_monster_hp: max_hp,
            monster_timer: cfg.monster_timer_secs,
            max_monster_timer: cfg.monster_timer_secs,
            combo_count: 0,
            helpers,
            encounter: Encounter::Active,
            next_ticket: 1,
        }
    }

    // ---------------- Derived reads -----------------

    pub fn is_boss(&self) -> bool {
        is_boss_level(self.level)
    }

    pub fn combo_multiplier(&self) -> f64 {
        combo_multiplier_for(self.combo_count)
    }

    pub fn total_helper_dps(&self) -> u64 {
        self.helpers
            .iter()
            .filter(|h| h.count > 0)
            .fold(0u64, |acc, h| acc.saturating_add(h.dps()))
    }

    pub fn upgrade_cost(&self) -> u64 {
        self.click_damage / 2
    }

    pub fn next_click_damage(&self) -> u64 {
        mul_div(self.click_damage, 6, 5)
    }

    pub fn can_afford_upgrade(&self) -> bool {
        self.gold >= self.upgrade_cost()
    }

    pub fn helper(&self, id: u32) -> Option<&Helper> {
        self.helpers.iter().find(|h| h.id == id)
    }

    pub fn can_afford_helper(&self, id: u32) -> bool {
        self.helper(id).is_some_and(|h| self.gold >= h.cost)
    }

    pub fn pending_respawn(&self) -> Option<RespawnPayload> {
        match self.encounter {
            Encounter::PendingRespawn(p) => Some(p),
            Encounter::Active => None,
        }
    }

    /// HP shown to the player; rounds up so a living monster never reads 0.
    pub fn displayed_hp(&self) -> u64 {
        self.current_monster_hp.max(0.0).ceil() as u64
    }

    pub fn hp_percent(&self) -> f64 {
        (self.current_monster_hp / self.max_monster_hp as f64 * 100.0).clamp(0.0, 100.0)
    }

    pub fn timer_percent(&self) -> f64 {
        if self.max_monster_timer == 0 {
            return 0.0;
        }
        (self.monster_timer as f64 / self.max_monster_timer as f64 * 100.0).clamp(0.0, 100.0)
    }

    // ---------------- Damage -----------------

    pub fn apply_click_damage(&mut self, amount: u64) -> DamageOutcome {
        self.apply_damage(amount)
    }

    pub fn apply_passive_damage(&mut self, amount: u64) -> DamageOutcome {
        self.apply_damage(amount)
    }

    fn apply_damage(&mut self, amount: u64) -> DamageOutcome {
        if amount == 0
            || self.encounter != Encounter::Active
            || self.current_monster_hp <= 0.0
        {
            return DamageOutcome::Ignored;
        }
        let total = amount as f64 * self.combo_multiplier();
        let new_hp = self.current_monster_hp - total;
        if new_hp > 0.0 {
            self.current_monster_hp = new_hp;
            return DamageOutcome::Hit { dealt: total };
        }

        self.current_monster_hp = 0.0;
        let next_level = self.level.saturating_add(1);
        let payload = RespawnPayload {
            ticket: self.next_ticket,
            gold_earned: gold_reward(self.max_monster_hp, self.is_boss(), self.combo_count),
            next_level,
            next_max_hp: scale_hp_up(self.max_monster_hp, is_boss_level(next_level)),
        };
        self.next_ticket += 1;
        self.encounter = Encounter::PendingRespawn(payload);
        DamageOutcome::Defeated(payload)
    }

    /// Applies the deferred next-level transition. Only the ticket that is
    /// currently pending is honoured, so each defeat resolves exactly once.
    pub fn resolve_respawn(&mut self, ticket: u64) -> Option<RespawnPayload> {
        let Encounter::PendingRespawn(p) = self.encounter else {
            return None;
        };
        if p.ticket != ticket {
            return None;
        }
        self.current_monster_hp = p.next_max_hp as f64;
        self.max_monster_hp = p.next_max_hp;
        self.monsters_defeated = self.monsters_defeated.saturating_add(1);
        self.gold = self.gold.saturating_add(p.gold_earned);
        self.level = p.next_level;
        self.monster_timer = self.max_monster_timer;
        self.combo_count = 0;
        self.encounter = Encounter::Active;
        Some(p)
    }

    // ---------------- Economy -----------------

    pub fn upgrade_click_damage(&mut self) -> PurchaseOutcome {
        let cost = self.upgrade_cost();
        if self.gold < cost {
            return PurchaseOutcome::InsufficientGold { cost };
        }
        self.gold -= cost;
        self.click_damage = self.next_click_damage();
        PurchaseOutcome::Bought { spent: cost }
    }

    pub fn buy_helper(&mut self, id: u32) -> PurchaseOutcome {
        let gold = self.gold;
        let Some(helper) = self.helpers.iter_mut().find(|h| h.id == id) else {
            return PurchaseOutcome::UnknownHelper;
        };
        let cost = helper.cost;
        if gold < cost {
            return PurchaseOutcome::InsufficientGold { cost };
        }
        helper.count = helper.count.saturating_add(1);
        helper.cost = mul_div(cost, 3, 2);
        self.gold -= cost;
        PurchaseOutcome::Bought { spent: cost }
    }

    // ---------------- Timer & combo -----------------

    pub fn tick_timer(&mut self) -> TimerOutcome {
        if self.monster_timer > 0 {
            self.monster_timer -= 1;
            return TimerOutcome::Counted { remaining: self.monster_timer };
        }
        if self.pending_respawn().is_some() {
            return TimerOutcome::HeldForRespawn;
        }
        let prev_level = self.level.saturating_sub(1).max(1);
        let base_hp = scale_hp_down(self.max_monster_hp, is_boss_level(prev_level));
        self.level = prev_level;
        self.current_monster_hp = base_hp as f64;
        self.max_monster_hp = base_hp;
        self.monster_timer = self.max_monster_timer;
        self.gold = mul_div(self.gold, 9, 10);
        self.combo_count = 0;
        TimerOutcome::Expired { level: prev_level }
    }

    pub fn increase_combo(&mut self) {
        self.combo_count = self.combo_count.saturating_add(1);
    }

    pub fn reset_combo(&mut self) {
        self.combo_count = 0;
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    /// Player clicked the monster; damage is the current click damage.
    Click,
    PassiveDamage { amount: u64 },
    TickTimer, // called once per elapsed real second
    UpgradeClickDamage,
    BuyHelper { id: u32 },
    IncreaseCombo,
    ResetCombo,
    /// Fired by the respawn timeout scheduled for `ticket`.
    Respawn { ticket: u64 },
    Restart(GameConfig),
}

impl Reducible for ProgressionState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            Click | PassiveDamage { .. } => {
                let outcome = match action {
                    PassiveDamage { amount } => new.apply_passive_damage(amount),
                    _ => new.apply_click_damage(new.click_damage),
                };
                match outcome {
                    DamageOutcome::Ignored => return self,
                    DamageOutcome::Hit { .. } => {}
                    DamageOutcome::Defeated(p) => clog(&format!(
                        "monster defeated on level {}: +{} gold, next max hp {}",
                        self.level, p.gold_earned, p.next_max_hp
                    )),
                }
            }
            TickTimer => {
                if let TimerOutcome::Expired { level } = new.tick_timer() {
                    clog(&format!(
                        "timer expired: level {} -> {}, gold {} -> {}",
                        self.level, level, self.gold, new.gold
                    ));
                }
            }
            UpgradeClickDamage => match new.upgrade_click_damage() {
                PurchaseOutcome::Bought { .. } => {}
                other => {
                    clog(&format!("upgrade declined: {:?}", other));
                    return self;
                }
            },
            BuyHelper { id } => match new.buy_helper(id) {
                PurchaseOutcome::Bought { .. } => {}
                other => {
                    clog(&format!("helper {} declined: {:?}", id, other));
                    return self;
                }
            },
            IncreaseCombo => new.increase_combo(),
            ResetCombo => {
                if new.combo_count == 0 {
                    return self;
                }
                new.reset_combo();
            }
            Respawn { ticket } => match new.resolve_respawn(ticket) {
                Some(p) => clog(&format!(
                    "level {}{} begins (max hp {})",
                    p.next_level,
                    if p.next_is_boss() { " BOSS" } else { "" },
                    p.next_max_hp
                )),
                None => return self,
            },
            Restart(cfg) => {
                clog("session restarted");
                new = ProgressionState::new(&cfg);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> ProgressionState {
        ProgressionState::default()
    }

    fn defeat(state: &mut ProgressionState) -> RespawnPayload {
        match state.apply_click_damage(u64::MAX / 2) {
            DamageOutcome::Defeated(p) => p,
            other => panic!("expected defeat, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_state() {
        let s = fresh();
        assert_eq!(s.level, 1);
        assert_eq!(s.gold, 0);
        assert_eq!(s.click_damage, 10);
        assert_eq!(s.max_monster_hp, 100);
        assert_eq!(s.current_monster_hp, 100.0);
        assert_eq!(s.monster_timer, 30);
        assert_eq!(s.max_monster_timer, 30);
        assert!(!s.is_boss());
        assert_eq!(s.combo_multiplier(), 1.0);
        assert_eq!(s.helpers.len(), 7);
        assert!(s.helpers.iter().all(|h| h.count == 0));
        assert_eq!(s.encounter, Encounter::Active);
    }

    #[test]
    fn test_click_damage_reduces_hp_by_amount_times_multiplier() {
        let mut s = fresh();
        s.increase_combo();
        s.increase_combo();
        let before = s.current_monster_hp;
        let outcome = s.apply_click_damage(10);
        assert_eq!(outcome, DamageOutcome::Hit { dealt: 12.0 });
        assert_eq!(s.current_monster_hp, (before - 10.0 * 1.2).max(0.0));
    }

    #[test]
    fn test_end_to_end_first_level() {
        let mut s = fresh();
        for i in 1..10 {
            assert!(matches!(s.apply_click_damage(10), DamageOutcome::Hit { .. }), "click {}", i);
        }
        assert_eq!(s.current_monster_hp, 10.0);
        let payload = defeat_with(&mut s, 10);
        assert_eq!(s.current_monster_hp, 0.0);
        assert_eq!(payload.gold_earned, 10);
        assert_eq!(s.level, 1, "level only changes once the respawn fires");
        assert_eq!(s.gold, 0);

        s.resolve_respawn(payload.ticket).unwrap();
        assert_eq!(s.level, 2);
        assert_eq!(s.max_monster_hp, 120);
        assert_eq!(s.current_monster_hp, 120.0);
        assert_eq!(s.gold, 10);
        assert_eq!(s.monsters_defeated, 1);
        assert_eq!(s.monster_timer, 30);
        assert!(!s.is_boss());
    }

    fn defeat_with(s: &mut ProgressionState, amount: u64) -> RespawnPayload {
        match s.apply_click_damage(amount) {
            DamageOutcome::Defeated(p) => p,
            other => panic!("expected defeat, got {:?}", other),
        }
    }

    #[test]
    fn test_damage_while_pending_respawn_is_ignored() {
        let mut s = fresh();
        let payload = defeat(&mut s);
        for _ in 0..5 {
            assert_eq!(s.apply_click_damage(10), DamageOutcome::Ignored);
            assert_eq!(s.apply_passive_damage(1000), DamageOutcome::Ignored);
        }
        assert_eq!(s.current_monster_hp, 0.0);
        assert_eq!(s.pending_respawn(), Some(payload));

        s.resolve_respawn(payload.ticket);
        assert_eq!(s.level, 2);
        assert_eq!(s.monsters_defeated, 1);
        assert_eq!(s.gold, payload.gold_earned);
    }

    #[test]
    fn test_respawn_applies_exactly_once() {
        let mut s = fresh();
        let payload = defeat(&mut s);
        assert!(s.resolve_respawn(payload.ticket).is_some());
        assert!(s.resolve_respawn(payload.ticket).is_none());
        assert_eq!(s.level, 2);
        assert_eq!(s.monsters_defeated, 1);
        assert_eq!(s.gold, 10);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut s = fresh();
        let first = defeat(&mut s);
        s.resolve_respawn(first.ticket);
        let second = defeat(&mut s);
        assert_ne!(first.ticket, second.ticket);
        assert!(s.resolve_respawn(first.ticket).is_none());
        assert_eq!(s.current_monster_hp, 0.0);
        assert!(s.resolve_respawn(second.ticket).is_some());
        assert_eq!(s.level, 3);
    }

    #[test]
    fn test_payload_is_captured_at_defeat_time() {
        let mut s = fresh();
        s.gold = 100;
        let payload = defeat(&mut s);
        // Spending while the respawn is pending must not be overwritten.
        s.buy_helper(1);
        assert_eq!(s.gold, 90);
        s.resolve_respawn(payload.ticket);
        assert_eq!(s.gold, 100);
        assert_eq!(s.max_monster_hp, payload.next_max_hp);
    }

    #[test]
    fn test_defeat_resets_combo() {
        let mut s = fresh();
        s.increase_combo();
        s.increase_combo();
        s.increase_combo();
        assert_eq!(s.combo_multiplier(), 1.3);
        let payload = defeat(&mut s);
        // comboBonus of 0.3: floor(100 * 0.1 * 1.3)
        assert_eq!(payload.gold_earned, 13);
        s.resolve_respawn(payload.ticket);
        assert_eq!(s.combo_count, 0);
        assert_eq!(s.combo_multiplier(), 1.0);
    }

    #[test]
    fn test_boss_levels_scale_hp_and_gold() {
        let mut s = fresh();
        s.level = 9;
        s.max_monster_hp = 1000;
        s.current_monster_hp = 1000.0;
        let payload = defeat(&mut s);
        assert_eq!(payload.next_level, 10);
        assert!(payload.next_is_boss());
        assert_eq!(payload.next_max_hp, 5000);
        assert_eq!(payload.gold_earned, 100);
        s.resolve_respawn(payload.ticket);
        assert!(s.is_boss());

        let boss_payload = defeat(&mut s);
        assert_eq!(boss_payload.gold_earned, 2500);
        assert_eq!(boss_payload.next_max_hp, 6000);
        s.resolve_respawn(boss_payload.ticket);
        assert_eq!(s.level, 11);
        assert!(!s.is_boss());
    }

    #[test]
    fn test_boss_cycle_is_pure_function_of_level() {
        for level in 1..=100u32 {
            assert_eq!(is_boss_level(level), level % 10 == 0, "level {}", level);
        }
        assert!(is_boss_level(10));
        assert!(is_boss_level(20));
        assert!(is_boss_level(30));
        assert!(!is_boss_level(11));
    }

    #[test]
    fn test_upgrade_click_damage() {
        let mut s = fresh();
        s.gold = 5;
        assert_eq!(s.upgrade_cost(), 5);
        assert_eq!(s.upgrade_click_damage(), PurchaseOutcome::Bought { spent: 5 });
        assert_eq!(s.gold, 0);
        assert_eq!(s.click_damage, 12);

        assert_eq!(s.upgrade_cost(), 6);
        assert_eq!(s.upgrade_click_damage(), PurchaseOutcome::InsufficientGold { cost: 6 });
        assert_eq!(s.click_damage, 12);
        assert_eq!(s.gold, 0);
    }

    #[test]
    fn test_buy_helper_insufficient_gold_is_noop() {
        let mut s = fresh();
        s.gold = 9;
        let before = s.clone();
        assert_eq!(s.buy_helper(1), PurchaseOutcome::InsufficientGold { cost: 10 });
        assert_eq!(s, before);
    }

    #[test]
    fn test_buy_unknown_helper_is_noop() {
        let mut s = fresh();
        s.gold = 1_000_000;
        let before = s.clone();
        assert_eq!(s.buy_helper(99), PurchaseOutcome::UnknownHelper);
        assert_eq!(s, before);
    }

    #[test]
    fn test_helper_cost_compounds_with_floor_each_step() {
        let mut s = fresh();
        s.gold = u64::MAX / 2;
        let mut expected = 50u64;
        for k in 1..=12u32 {
            let gold_before = s.gold;
            assert_eq!(s.buy_helper(2), PurchaseOutcome::Bought { spent: expected });
            assert_eq!(s.gold, gold_before - expected);
            expected = (expected as f64 * 1.5).floor() as u64;
            let h = s.helper(2).unwrap();
            assert_eq!(h.cost, expected);
            assert_eq!(h.count, k);
        }
        // 10 -> 15 -> 22 -> 33: floor applied at each step.
        s.buy_helper(1);
        s.buy_helper(1);
        s.buy_helper(1);
        assert_eq!(s.helper(1).unwrap().cost, 33);
    }

    #[test]
    fn test_total_helper_dps() {
        let mut s = fresh();
        assert_eq!(s.total_helper_dps(), 0);
        s.gold = 1_000;
        s.buy_helper(1);
        s.buy_helper(1);
        s.buy_helper(2);
        assert_eq!(s.total_helper_dps(), 2 * 1 + 5);
    }

    #[test]
    fn test_tick_timer_counts_down() {
        let mut s = fresh();
        assert_eq!(s.tick_timer(), TimerOutcome::Counted { remaining: 29 });
        assert_eq!(s.monster_timer, 29);
        assert_eq!(s.level, 1);
        assert_eq!(s.gold, 0);
    }

    #[test]
    fn test_timer_regression_into_boss_level() {
        let mut s = fresh();
        s.level = 11;
        s.max_monster_hp = 1000;
        s.current_monster_hp = 640.0;
        s.gold = 55;
        s.combo_count = 4;
        s.monster_timer = 1;
        assert_eq!(s.tick_timer(), TimerOutcome::Counted { remaining: 0 });
        assert_eq!(s.level, 11);
        assert_eq!(s.tick_timer(), TimerOutcome::Expired { level: 10 });
        assert_eq!(s.level, 10);
        assert!(s.is_boss());
        assert_eq!(s.max_monster_hp, 200);
        assert_eq!(s.current_monster_hp, 200.0);
        assert_eq!(s.gold, 49);
        assert_eq!(s.combo_count, 0);
        assert_eq!(s.monster_timer, 30);
    }

    #[test]
    fn test_timer_regression_floors_at_level_one() {
        let mut s = fresh();
        s.monster_timer = 0;
        s.gold = 100;
        assert_eq!(s.tick_timer(), TimerOutcome::Expired { level: 1 });
        assert_eq!(s.level, 1);
        assert_eq!(s.max_monster_hp, 83);
        assert_eq!(s.gold, 90);
    }

    #[test]
    fn test_repeated_regressions_drift() {
        let mut s = fresh();
        s.level = 3;
        s.monster_timer = 0;
        s.tick_timer();
        s.monster_timer = 0;
        s.tick_timer();
        assert_eq!(s.level, 1);
        // 100 -> 83 -> 69, not the starting 100.
        assert_eq!(s.max_monster_hp, 69);
    }

    #[test]
    fn test_timer_does_not_regress_during_pending_respawn() {
        let mut s = fresh();
        s.monster_timer = 0;
        let payload = defeat(&mut s);
        assert_eq!(s.tick_timer(), TimerOutcome::HeldForRespawn);
        assert_eq!(s.level, 1);
        assert_eq!(s.current_monster_hp, 0.0);
        s.resolve_respawn(payload.ticket);
        assert_eq!(s.level, 2);
        assert_eq!(s.monster_timer, 30);
    }

    #[test]
    fn test_combo_multiplier() {
        let mut s = fresh();
        s.increase_combo();
        s.increase_combo();
        s.increase_combo();
        assert_eq!(s.combo_count, 3);
        assert_eq!(s.combo_multiplier(), 1.3);
        s.reset_combo();
        assert_eq!(s.combo_count, 0);
        assert_eq!(s.combo_multiplier(), 1.0);
    }

    #[test]
    fn test_displayed_hp_rounds_up() {
        let mut s = fresh();
        s.current_monster_hp = 0.4;
        assert_eq!(s.displayed_hp(), 1);
        assert!((s.hp_percent() - 0.4).abs() < 1e-9);
        s.current_monster_hp = 57.5;
        assert_eq!(s.displayed_hp(), 58);
    }

    #[test]
    fn test_reducer_click_and_respawn() {
        let state = Rc::new(fresh());
        let state = state.reduce(GameAction::PassiveDamage { amount: 95 });
        assert_eq!(state.current_monster_hp, 5.0);
        let state = state.reduce(GameAction::Click);
        let ticket = state.pending_respawn().unwrap().ticket;
        let again = state.clone().reduce(GameAction::Click);
        assert!(Rc::ptr_eq(&state, &again), "ignored damage returns the same state");
        let state = state.reduce(GameAction::Respawn { ticket });
        assert_eq!(state.level, 2);
        let state = state.reduce(GameAction::Respawn { ticket });
        assert_eq!(state.level, 2);
        assert_eq!(state.monsters_defeated, 1);
    }

    #[test]
    fn test_reducer_declined_purchase_keeps_state() {
        let state = Rc::new(fresh());
        let after = state.clone().reduce(GameAction::BuyHelper { id: 1 });
        assert!(Rc::ptr_eq(&state, &after));
        // Upgrade cost 5 with 0 gold.
        let after = state.clone().reduce(GameAction::UpgradeClickDamage);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn test_reducer_restart() {
        let mut s = fresh();
        s.level = 7;
        s.gold = 300;
        let state = Rc::new(s).reduce(GameAction::Restart(GameConfig::default()));
        assert_eq!(*state, fresh());
    }
}
