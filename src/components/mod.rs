pub mod app;
pub mod boss_banner;
pub mod controls_panel;
pub mod game_view;
pub mod health_bar;
pub mod helpers_panel;
pub mod intro_overlay;
pub mod monster_panel;
pub mod settings_modal;
pub mod stats_panel;
pub mod upgrade_panel;
