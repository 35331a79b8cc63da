pub mod app;
pub mod settings_modal;
pub mod swipe_panel;
