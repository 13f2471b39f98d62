//! Keyboard shortcut popup

mod help_content;
pub mod help_popup_render;
mod help_state;

pub use help_content::{HELP_FOOTER, HELP_SECTIONS, HelpSection};
pub use help_state::HelpPopupState;
