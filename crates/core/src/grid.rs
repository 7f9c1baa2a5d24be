//! The playfield grid.
//!
//! A fixed 10x20 matrix of cells stored as a flat row-major array for cache
//! locality. Row 0 is the top; y grows downward. Locked cells carry the piece
//! type that produced them (the renderer maps that to a color). All queries
//! are bounds-checked; anything outside the grid counts as occupied for
//! collision purposes.

use arrayvec::ArrayVec;

use gridfall_types::{Cell, Point, TetrominoType, GRID_HEIGHT, GRID_WIDTH};

const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(position: Point) -> Option<usize> {
        if position.x < 0
            || position.x >= GRID_WIDTH as i8
            || position.y < 0
            || position.y >= GRID_HEIGHT as i8
        {
            return None;
        }
        Some((position.y as usize) * (GRID_WIDTH as usize) + (position.x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Cell contents, or `None` if the position is outside the grid.
    pub fn get(&self, position: Point) -> Option<Cell> {
        Self::index(position).map(|i| self.cells[i])
    }

    /// Write a locked cell. Out-of-bounds writes are a programming error:
    /// the Game Manager validates every position before committing.
    pub fn set_cell(&mut self, position: Point, kind: TetrominoType) {
        let index = Self::index(position)
            .unwrap_or_else(|| unreachable!("set_cell out of bounds: {position:?}"));
        self.cells[index] = Some(kind);
    }

    /// True if the position is inside the grid and holds a locked cell.
    pub fn is_cell_occupied(&self, position: Point) -> bool {
        matches!(self.get(position), Some(Some(_)))
    }

    /// True if the position is inside the grid and empty: the validity test
    /// for every mino of a candidate piece placement.
    pub fn is_cell_free(&self, position: Point) -> bool {
        matches!(self.get(position), Some(None))
    }

    /// True if row `y` has no empty cell.
    pub fn is_line_fully_occupied(&self, y: usize) -> bool {
        assert!(y < GRID_HEIGHT as usize, "row {y} out of range");
        let start = y * GRID_WIDTH as usize;
        self.cells[start..start + GRID_WIDTH as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove row `y`, shift every row above it down by one, and insert an
    /// empty row at the top. Only ever called for verified full rows.
    pub fn clear_line(&mut self, y: usize) {
        assert!(y < GRID_HEIGHT as usize, "row {y} out of range");
        let width = GRID_WIDTH as usize;

        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            let dst = row * width;
            self.cells.copy_within(src..src + width, dst);
        }
        self.cells[..width].fill(None);
    }

    /// Clear every fully occupied row in one pass (classic simultaneous
    /// multi-line clear) and return the cleared row indices, bottom to top.
    ///
    /// Two-pointer compaction: surviving rows are moved down to their final
    /// position, then the vacated top rows are emptied. At most 4 rows can be
    /// full at once, so the result fits an `ArrayVec` without allocating.
    pub fn clear_fully_occupied_lines(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let width = GRID_WIDTH as usize;
        let mut write_y = GRID_HEIGHT as usize;

        for read_y in (0..GRID_HEIGHT as usize).rev() {
            if self.is_line_fully_occupied(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell (game restart).
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
