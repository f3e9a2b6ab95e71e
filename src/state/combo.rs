// Click-speed bookkeeping deciding which clicks extend the combo
use crate::config::COMBO_WINDOW_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComboStep {
    /// First click, or the previous click is too old: start over.
    Reset,
    Extend,
}

#[derive(Default, Debug, Clone)]
pub struct ComboWindow {
    pub last_click_ms: Option<f64>,
}

impl ComboWindow {
    pub fn register(&mut self, now_ms: f64) -> ComboStep {
        let step = match self.last_click_ms {
            Some(prev) if now_ms - prev <= COMBO_WINDOW_MS as f64 => ComboStep::Extend,
            _ => ComboStep::Reset,
        };
        self.last_click_ms = Some(now_ms);
        step
    }

    /// Whether a combo would still be alive at `now_ms`.
    pub fn is_live(&self, now_ms: f64) -> bool {
        self.last_click_ms
            .is_some_and(|prev| now_ms - prev <= COMBO_WINDOW_MS as f64)
    }
}
