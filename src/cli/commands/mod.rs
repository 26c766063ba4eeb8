//! Shell command handlers, grouped by concern.

mod items;
mod system;
mod views;

use super::registry::CommandRegistry;

pub fn register_all(registry: &mut CommandRegistry) {
    items::register(registry);
    views::register(registry);
    system::register(registry);
}
