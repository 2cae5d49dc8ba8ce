pub mod banner;
pub mod json_view;
pub mod panel;
pub mod tui;

use crate::shared::config::AppConfig;

/// Prints the welcome banner (when enabled) and applies the theme for all subsequent inquire prompts.
/// Call once before the interactive form starts.
pub fn init_ui(cfg: &AppConfig) {
    let color = cfg.color_or_default();
    if cfg.show_banner_or_default() {
        banner::print_welcome(color);
    }
    tui::apply_theme(color);
}
