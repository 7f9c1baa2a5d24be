//! 7-bag piece permutation.
//!
//! A bag is one uniformly shuffled permutation of all seven piece types, so
//! every type appears exactly once per cycle before any repetition. The Game
//! Manager keeps two bags and a cursor so the preview piece never needs a bag
//! that has not been generated yet.

use gridfall_types::TetrominoType;

use crate::rng::SimpleRng;

/// One shuffled permutation of the 7 tetromino types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bag {
    pieces: [TetrominoType; 7],
}

impl Bag {
    pub const SIZE: usize = 7;

    /// Shuffle a fresh bag, consuming randomness from the shared RNG.
    pub fn new(rng: &mut SimpleRng) -> Self {
        let mut pieces = TetrominoType::ALL;
        rng.shuffle(&mut pieces);
        Self { pieces }
    }

    /// Piece at position `index` within this permutation.
    ///
    /// Indexing past the bag is a programming error in the sequencing logic.
    pub fn get(&self, index: usize) -> TetrominoType {
        assert!(index < Self::SIZE, "bag index {index} out of range");
        self.pieces[index]
    }

    pub fn pieces(&self) -> &[TetrominoType; 7] {
        &self.pieces
    }
}
