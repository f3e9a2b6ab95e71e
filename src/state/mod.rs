pub mod combo;
pub mod settings;

pub use combo::{ComboStep, ComboWindow};
pub use settings::Settings;
