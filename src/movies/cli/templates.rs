//! Terminal output templates (minijinja).
//!
//! Templates live in `templates/*.tmp` and are included as string constants.
//! They pick styles by semantic name through the `style` filter; anything that
//! needs width math (title truncation, padding) is computed in Rust first.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const STATISTICS_TEMPLATE: &str = include_str!("templates/statistics.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const MENU_TEMPLATE: &str = include_str!("templates/menu.tmp");
