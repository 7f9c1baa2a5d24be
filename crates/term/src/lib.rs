//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the game view draws a
//! [`core::GameSnapshot`] into a plain framebuffer, and the terminal renderer
//! flushes framebuffers to the terminal with diff-based redraws. Keeping the
//! view pure (no I/O) makes it unit-testable and keeps `core` free of any
//! terminal concern.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
