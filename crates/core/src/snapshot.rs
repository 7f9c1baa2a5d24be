//! Read-only state snapshots for observers.
//!
//! A [`GameSnapshot`] is a flat copy of everything a renderer or a test needs
//! to inspect: locked grid cells, the four optional piece slots, counters,
//! and the simulation step. Two runs of the engine are equal exactly when
//! their snapshots are equal, which is what the replay determinism tests
//! lean on.

use gridfall_types::{Cell, GameState, Point, Rotation, TetrominoType, GRID_HEIGHT, GRID_WIDTH};

use crate::tetromino::Tetromino;

/// Pose of one piece slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: TetrominoType,
    pub rotation: Rotation,
    pub position: Point,
}

impl From<Tetromino> for PieceSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            position: value.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cells: [Cell; (GRID_WIDTH as usize) * (GRID_HEIGHT as usize)],
    pub active: Option<PieceSnapshot>,
    pub ghost: Option<PieceSnapshot>,
    pub preview: Option<TetrominoType>,
    pub held: Option<TetrominoType>,
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub state: GameState,
    pub step: u64,
    pub seed: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [None; (GRID_WIDTH as usize) * (GRID_HEIGHT as usize)],
            active: None,
            ghost: None,
            preview: None,
            held: None,
            score: 0,
            level: 0,
            lines_cleared: 0,
            state: GameState::Playing,
            step: 0,
            seed: 0,
        }
    }
}
