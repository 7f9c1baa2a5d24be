//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`] values the
//! Game Manager consumes. Soft drop is edge-triggered: the Down key press
//! maps to `MoveDown` and its release to `ReleaseMoveDown`, so the manager
//! can switch the accelerated gravity schedule on and off.

pub mod map;

pub use gridfall_types as types;

pub use map::{map_key_event, should_quit, should_restart};
