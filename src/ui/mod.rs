//! UI-Layer mit egui: Viewport-Input, Keyboard-Shortcuts, Menü, Status-Bar.

pub mod input;
mod keyboard;
pub mod menu;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use status::render_status_bar;
