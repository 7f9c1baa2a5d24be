//! Shared plain data types for the gridfall engine.
//! This crate is dependency-free: enums, a grid coordinate type, and the
//! immutable timing/scoring tables the simulation consumes.

/// Grid dimensions (cells).
pub const GRID_WIDTH: u8 = 10;
pub const GRID_HEIGHT: u8 = 20;

/// Host loop pacing (milliseconds per simulation tick). The core never reads
/// a clock; this is only for the terminal frontend.
pub const SIMULATION_TICK_MS: u64 = 16;

/// Ticks a grounded piece may rest before it locks.
pub const LOCK_DELAY_TICKS: u64 = 30;

/// Maximum number of lock-delay timer resets granted per piece.
pub const MAX_LOCK_DELAY_RESETS: u32 = 15;

/// Divisor applied to the gravity delay while soft drop is held.
pub const ACCELERATED_GRAVITY_DIVISOR: u64 = 20;

/// Ticks between automatic falls, indexed by level. Levels beyond the table
/// clamp to the last entry.
pub const FRAMES_PER_TILE: [u64; 30] = [
    48, 43, 38, 33, 28, 23, 18, 13, 8, 6, 5, 5, 5, 4, 4, 4, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    1,
];

/// Points per simultaneous line clear count (index = lines), before the
/// `level + 1` multiplier.
pub const LINE_CLEAR_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points per cell dropped by a hard drop.
pub const HARD_DROP_SCORE_PER_CELL: u32 = 2;

/// Lines cleared per level step.
pub const LINES_PER_LEVEL: u32 = 10;

/// Integer (x, y) grid coordinate, used for absolute cell positions and for
/// relative offsets (mino shapes, wall kicks). y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Component-wise translation.
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl core::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// The seven tetromino variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl TetrominoType {
    /// All variants, in canonical order (one bag's worth).
    pub const ALL: [TetrominoType; 7] = [
        TetrominoType::I,
        TetrominoType::J,
        TetrominoType::L,
        TetrominoType::O,
        TetrominoType::S,
        TetrominoType::T,
        TetrominoType::Z,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TetrominoType::I => "i",
            TetrominoType::J => "j",
            TetrominoType::L => "l",
            TetrominoType::O => "o",
            TetrominoType::S => "s",
            TetrominoType::T => "t",
            TetrominoType::Z => "z",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(TetrominoType::I),
            "j" => Some(TetrominoType::J),
            "l" => Some(TetrominoType::L),
            "o" => Some(TetrominoType::O),
            "s" => Some(TetrominoType::S),
            "t" => Some(TetrominoType::T),
            "z" => Some(TetrominoType::Z),
            _ => None,
        }
    }
}

/// Rotation states (North = spawn orientation). Cyclic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn rotated_clockwise(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn rotated_counter_clockwise(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Discrete input events fed to the Game Manager by the host loop.
///
/// `MoveDown`/`ReleaseMoveDown` bracket the soft-drop acceleration window;
/// everything else is a single edge-triggered action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    RotateLeft,
    RotateRight,
    MoveLeft,
    MoveRight,
    MoveDown,
    ReleaseMoveDown,
    Drop,
    Hold,
}

impl InputEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::RotateLeft => "rotateLeft",
            InputEvent::RotateRight => "rotateRight",
            InputEvent::MoveLeft => "moveLeft",
            InputEvent::MoveRight => "moveRight",
            InputEvent::MoveDown => "moveDown",
            InputEvent::ReleaseMoveDown => "releaseMoveDown",
            InputEvent::Drop => "drop",
            InputEvent::Hold => "hold",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rotateLeft" => Some(InputEvent::RotateLeft),
            "rotateRight" => Some(InputEvent::RotateRight),
            "moveLeft" => Some(InputEvent::MoveLeft),
            "moveRight" => Some(InputEvent::MoveRight),
            "moveDown" => Some(InputEvent::MoveDown),
            "releaseMoveDown" => Some(InputEvent::ReleaseMoveDown),
            "drop" => Some(InputEvent::Drop),
            "hold" => Some(InputEvent::Hold),
            _ => None,
        }
    }
}

/// Terminal states of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
}

/// Origin of a downward move attempt. `Forced` moves come from the player
/// holding the down key; `Gravity` moves from the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementType {
    Gravity,
    Forced,
}

/// Grid cell contents. `None` is empty; `Some` records the locked piece type
/// (which doubles as its color for the renderer).
pub type Cell = Option<TetrominoType>;
