mod handler;
pub mod keymap;
pub mod pointer;

pub(crate) use handler::InputEventOutcome;
pub use keymap::{KeymapPreset, map_key_to_command, map_key_to_command_with_preset};
pub use pointer::{PointerTarget, hit_test, map_mouse_to_commands};
