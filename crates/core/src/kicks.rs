//! Wall-kick tables and rotation resolution.
//!
//! Rotating a piece first tries the naive in-place rotation, then walks up to
//! 5 candidate translation offsets from a table indexed by the ordered
//! (from, to) rotation pair. Only adjacent transitions exist (no 180° turns),
//! so exactly 8 pairs are reachable. J/L/T/S/Z share one table; I has its own
//! with larger offsets; O has no table because its rotated cells are
//! identical, so the first candidate always validates.
//!
//! Offsets are in grid coordinates (y down).

use gridfall_types::{Point, Rotation, TetrominoType};

use crate::grid::Grid;
use crate::tetromino::Tetromino;

/// 8 (from, to) transitions x 5 candidate offsets each.
pub type WallKickTable = [[Point; 5]; 8];

/// Map an adjacent rotation transition to its table row.
///
/// Non-adjacent pairs are unreachable from the rotation logic; hitting one is
/// a programming error.
pub fn rotation_to_index(from: Rotation, to: Rotation) -> usize {
    match (from, to) {
        (Rotation::North, Rotation::East) => 0,
        (Rotation::East, Rotation::North) => 1,
        (Rotation::East, Rotation::South) => 2,
        (Rotation::South, Rotation::East) => 3,
        (Rotation::South, Rotation::West) => 4,
        (Rotation::West, Rotation::South) => 5,
        (Rotation::West, Rotation::North) => 6,
        (Rotation::North, Rotation::West) => 7,
        _ => unreachable!("non-adjacent rotation transition {from:?} -> {to:?}"),
    }
}

/// Kick table for a piece type; `None` for O (single effective rotation
/// state, rotation trivially succeeds in place).
pub fn wall_kick_table(kind: TetrominoType) -> Option<&'static WallKickTable> {
    match kind {
        TetrominoType::I => Some(&WALL_KICKS_I),
        TetrominoType::O => None,
        _ => Some(&WALL_KICKS_JLTSZ),
    }
}

const fn p(x: i8, y: i8) -> Point {
    Point::new(x, y)
}

/// Shared table for J, L, T, S, Z.
static WALL_KICKS_JLTSZ: WallKickTable = [
    // North -> East
    [p(0, 0), p(-1, 0), p(-1, -1), p(0, 2), p(-1, 2)],
    // East -> North
    [p(0, 0), p(1, 0), p(1, 1), p(0, -2), p(1, -2)],
    // East -> South
    [p(0, 0), p(1, 0), p(1, 1), p(0, -2), p(1, -2)],
    // South -> East
    [p(0, 0), p(-1, 0), p(-1, -1), p(0, 2), p(-1, 2)],
    // South -> West
    [p(0, 0), p(1, 0), p(1, -1), p(0, 2), p(1, 2)],
    // West -> South
    [p(0, 0), p(-1, 0), p(-1, 1), p(0, -2), p(-1, -2)],
    // West -> North
    [p(0, 0), p(-1, 0), p(-1, 1), p(0, -2), p(-1, -2)],
    // North -> West
    [p(0, 0), p(1, 0), p(1, -1), p(0, 2), p(1, 2)],
];

/// I-piece table (larger offsets).
static WALL_KICKS_I: WallKickTable = [
    // North -> East
    [p(0, 0), p(-2, 0), p(1, 0), p(-2, 1), p(1, -2)],
    // East -> North
    [p(0, 0), p(2, 0), p(-1, 0), p(2, -1), p(-1, 2)],
    // East -> South
    [p(0, 0), p(-1, 0), p(2, 0), p(-1, -2), p(2, 1)],
    // South -> East
    [p(0, 0), p(1, 0), p(-2, 0), p(1, 2), p(-2, -1)],
    // South -> West
    [p(0, 0), p(2, 0), p(-1, 0), p(2, -1), p(-1, 2)],
    // West -> South
    [p(0, 0), p(-2, 0), p(1, 0), p(-2, 1), p(1, -2)],
    // West -> North
    [p(0, 0), p(1, 0), p(-2, 0), p(1, 2), p(-2, -1)],
    // North -> West
    [p(0, 0), p(-1, 0), p(2, 0), p(-1, -2), p(2, 1)],
];

/// Attempt to rotate `piece` into `to`, resolving collisions via the kick
/// table. Returns the rotated (and possibly kicked) piece, or `None` when no
/// candidate offset yields an all-valid placement.
pub fn try_rotation(grid: &Grid, piece: &Tetromino, to: Rotation) -> Option<Tetromino> {
    let rotated = piece.with_rotation(to);

    let Some(table) = wall_kick_table(piece.kind) else {
        // O piece: rotated cells are identical, no kick needed.
        debug_assert_eq!(rotated.cells(), piece.cells());
        return Some(rotated);
    };

    let candidates = &table[rotation_to_index(piece.rotation, to)];
    for offset in candidates {
        let candidate = Tetromino {
            position: rotated.position + *offset,
            ..rotated
        };
        if candidate.cells().iter().all(|&cell| grid.is_cell_free(cell)) {
            return Some(candidate);
        }
    }
    None
}
