//! Core simulation engine - pure, deterministic, and testable
//!
//! This crate contains the whole rule set of the game: the grid, the pieces,
//! the 7-bag randomizer, wall-kick rotation, lock delay, gravity scheduling,
//! scoring, and the [`GameManager`] state machine that ties them together.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the same seed and input sequence produce an identical
//!   game, tick for tick
//! - **Testable**: every rule is exercised by unit tests next to the code
//! - **Portable**: runs in any host (terminal, headless replay, benches)
//!
//! # Module structure
//!
//! - [`grid`]: 10x20 cell matrix with bounds-checked queries and line clears
//! - [`tetromino`]: piece shapes per rotation and the active-piece type
//! - [`kicks`]: wall-kick tables and rotation resolution
//! - [`bag`]: one shuffled permutation of the 7 piece types
//! - [`rng`]: seeded LCG, the only randomness source in the engine
//! - [`game_manager`]: the authoritative state machine
//! - [`recording`]: seed + (tick, event) log for deterministic replay
//! - [`snapshot`]: flat read-only state copies for observers
//!
//! # Timing
//!
//! Everything is scheduled in simulation ticks, never wall-clock time. The
//! host calls [`GameManager::update`] once per fixed step and
//! [`GameManager::handle_input_event`] for each queued input.

pub mod bag;
pub mod game_manager;
pub mod grid;
pub mod kicks;
pub mod recording;
pub mod rng;
pub mod snapshot;
pub mod tetromino;

pub use gridfall_types as types;

pub use bag::Bag;
pub use game_manager::GameManager;
pub use grid::Grid;
pub use kicks::{rotation_to_index, try_rotation, wall_kick_table, WallKickTable};
pub use recording::{RecordedEvent, Recording};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use tetromino::{minos, Tetromino};
