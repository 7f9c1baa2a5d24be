//! Replay module - recording persistence and deterministic playback.
//!
//! A finished (or in-progress) game is fully described by its RNG seed plus
//! the step-tagged input events the Game Manager logged. This crate persists
//! that as JSON and plays it back through a fresh engine instance; given the
//! same engine build, playback reproduces every snapshot of the original
//! session exactly.
//!
//! The wire format is versioned and intentionally tiny:
//!
//! ```json
//! {"version":1,"seed":1337,"events":[{"step":48,"event":"moveLeft"},{"step":52,"event":"drop"}]}
//! ```

pub mod driver;
pub mod format;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use driver::ReplayDriver;
pub use format::{from_json, load_recording, save_recording, to_json, ReplayFile};
