//! Tetromino shapes and the active-piece value type.
//!
//! Each piece type has a canonical set of 4 mino offsets per rotation state
//! (SRS layout, y-down). The occupied cells of a piece are a pure function of
//! (type, rotation); a [`Tetromino`] just adds an anchor position.

use gridfall_types::{Point, Rotation, TetrominoType};

/// Spawn anchor for freshly spawned pieces.
pub const SPAWN_POSITION: Point = Point::new(3, 0);

/// Mino offsets for a piece type in a given rotation state, relative to the
/// piece anchor.
pub fn minos(kind: TetrominoType, rotation: Rotation) -> [Point; 4] {
    let cells: [(i8, i8); 4] = match kind {
        TetrominoType::I => match rotation {
            Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
            Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
            Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
            Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
        },
        // O occupies the same cells in every rotation state.
        TetrominoType::O => [(1, 0), (2, 0), (1, 1), (2, 1)],
        TetrominoType::T => match rotation {
            Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
            Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
            Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
            Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
        },
        TetrominoType::S => match rotation {
            Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
            Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
            Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
            Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
        },
        TetrominoType::Z => match rotation {
            Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
            Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
            Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
            Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
        },
        TetrominoType::J => match rotation {
            Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
            Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
            Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
            Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
        },
        TetrominoType::L => match rotation {
            Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
            Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
            Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
            Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
        },
    };
    cells.map(|(dx, dy)| Point::new(dx, dy))
}

/// A piece: type, rotation state, and anchor position. The occupied cells are
/// derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: TetrominoType,
    pub rotation: Rotation,
    pub position: Point,
}

impl Tetromino {
    /// A fresh piece at the spawn anchor, facing North.
    pub fn spawn(kind: TetrominoType) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            position: SPAWN_POSITION,
        }
    }

    /// Absolute grid positions of the 4 minos.
    pub fn cells(&self) -> [Point; 4] {
        minos(self.kind, self.rotation).map(|offset| self.position + offset)
    }

    /// Copy translated by (dx, dy).
    pub fn moved_by(&self, dx: i8, dy: i8) -> Self {
        Self {
            position: self.position.offset(dx, dy),
            ..*self
        }
    }

    /// Copy with a different rotation state, same anchor.
    pub fn with_rotation(&self, rotation: Rotation) -> Self {
        Self { rotation, ..*self }
    }
}
