//! The Game Manager: the authoritative simulation state machine.
//!
//! Owns the grid, the four optional piece slots (active / ghost / preview /
//! held), the two sequence bags, the counters, and the gravity and lock-delay
//! schedules. The host drives it with [`GameManager::handle_input_event`] for
//! each queued input followed by [`GameManager::update`] once per fixed
//! simulation tick; everything is scheduled against the tick index, so a
//! recorded input stream plus the seed replays bit for bit.

use gridfall_types::{
    GameState, InputEvent, MovementType, Rotation, TetrominoType, FRAMES_PER_TILE,
    ACCELERATED_GRAVITY_DIVISOR, HARD_DROP_SCORE_PER_CELL, LINES_PER_LEVEL, LINE_CLEAR_SCORES,
    LOCK_DELAY_TICKS, MAX_LOCK_DELAY_RESETS,
};

use crate::bag::Bag;
use crate::grid::Grid;
use crate::kicks::try_rotation;
use crate::recording::Recording;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::tetromino::Tetromino;

#[derive(Debug, Clone)]
pub struct GameManager {
    rng: SimpleRng,
    grid: Grid,
    active: Option<Tetromino>,
    ghost: Option<Tetromino>,
    preview: Option<Tetromino>,
    held: Option<Tetromino>,
    score: u32,
    level: u32,
    lines_cleared: u32,
    state: GameState,
    /// Simulation tick index, incremented once per `update()`.
    step: u64,
    /// Step at which the next automatic fall is due.
    next_gravity_step: u64,
    /// Current bag plus lookahead bag; `sequence_index` walks bag 0.
    sequence_bags: [Bag; 2],
    sequence_index: usize,
    is_accelerated_down_movement: bool,
    allowed_to_hold: bool,
    is_in_lock_delay: bool,
    /// Step at which the lock-delay timer elapses.
    lock_delay_expiry_step: u64,
    /// Grace resets consumed by the current piece.
    executed_lock_delays: u32,
    seed: u32,
    recording: Option<Recording>,
}

impl GameManager {
    /// Build a manager with a fixed seed. With `record_game` set, every
    /// handled input event is logged together with its tick index.
    pub fn new(seed: u32, record_game: bool) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = Bag::new(&mut rng);
        let lookahead = Bag::new(&mut rng);

        let mut manager = Self {
            rng,
            grid: Grid::new(),
            active: None,
            ghost: None,
            preview: None,
            held: None,
            score: 0,
            level: 0,
            lines_cleared: 0,
            state: GameState::Playing,
            step: 0,
            next_gravity_step: FRAMES_PER_TILE[0],
            sequence_bags: [current, lookahead],
            sequence_index: 0,
            is_accelerated_down_movement: false,
            allowed_to_hold: true,
            is_in_lock_delay: false,
            lock_delay_expiry_step: 0,
            executed_lock_delays: 0,
            seed,
            recording: record_game.then(|| Recording::new(seed)),
        };
        manager.spawn_next_tetromino();
        manager
    }

    /// Advance the simulation by one tick: scheduled gravity, lock-delay
    /// accounting, ghost refresh. A no-op once the game is over.
    pub fn update(&mut self) {
        if self.state == GameState::GameOver {
            return;
        }
        self.step += 1;

        if self.step >= self.next_gravity_step {
            self.move_tetromino_down(MovementType::Gravity);
            self.next_gravity_step = self.step + self.gravity_delay();
        }

        if self.is_in_lock_delay && self.state == GameState::Playing {
            if self.can_move_down() {
                // The piece slid off its support; it is falling again.
                self.reset_lock_delay();
            } else if self.step >= self.lock_delay_expiry_step
                || self.executed_lock_delays >= MAX_LOCK_DELAY_RESETS
            {
                self.lock_active_tetromino();
            }
        }

        self.refresh_ghost_tetromino();
    }

    /// Feed one input event. Returns whether the event caused a real state
    /// change (used by the lock-delay grace accounting and recorded for
    /// replay). Events arriving after game over are logged but ignored.
    pub fn handle_input_event(&mut self, event: InputEvent) -> bool {
        if let Some(recording) = &mut self.recording {
            recording.push(self.step, event);
        }
        if self.state == GameState::GameOver {
            return false;
        }

        let moved = match event {
            InputEvent::RotateLeft => self.with_lock_delay(|manager| manager.rotate_tetromino_left()),
            InputEvent::RotateRight => {
                self.with_lock_delay(|manager| manager.rotate_tetromino_right())
            }
            InputEvent::MoveLeft => self.with_lock_delay(|manager| manager.move_tetromino_left()),
            InputEvent::MoveRight => self.with_lock_delay(|manager| manager.move_tetromino_right()),
            InputEvent::MoveDown => {
                self.is_accelerated_down_movement = true;
                self.move_tetromino_down(MovementType::Forced)
            }
            InputEvent::ReleaseMoveDown => {
                self.is_accelerated_down_movement = false;
                self.next_gravity_step = self.step + self.gravity_delay();
                false
            }
            InputEvent::Drop => self.drop_tetromino(),
            InputEvent::Hold => self.hold_tetromino(),
        };

        self.refresh_ghost_tetromino();
        moved
    }

    /// Successful moves and rotations while resting on a surface reset the
    /// lock-delay timer, each consuming one bounded grace use.
    fn with_lock_delay(&mut self, movement: impl FnOnce(&mut Self) -> bool) -> bool {
        let moved = movement(self);
        if moved && self.is_in_lock_delay {
            self.executed_lock_delays += 1;
            self.lock_delay_expiry_step = self.step + LOCK_DELAY_TICKS;
        }
        moved
    }

    pub fn rotate_tetromino_right(&mut self) -> bool {
        self.rotate_to(|rotation| rotation.rotated_clockwise())
    }

    pub fn rotate_tetromino_left(&mut self) -> bool {
        self.rotate_to(|rotation| rotation.rotated_counter_clockwise())
    }

    fn rotate_to(&mut self, next: impl FnOnce(Rotation) -> Rotation) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        match try_rotation(&self.grid, &active, next(active.rotation)) {
            Some(rotated) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    pub fn move_tetromino_left(&mut self) -> bool {
        self.move_by(-1)
    }

    pub fn move_tetromino_right(&mut self) -> bool {
        self.move_by(1)
    }

    fn move_by(&mut self, dx: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let moved = active.moved_by(dx, 0);
        if !self.is_tetromino_position_valid(&moved) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Attempt a one-row fall. On failure the piece has landed and lock-delay
    /// accounting starts; the actual lock happens in `update()` once the
    /// timer elapses or the grace uses run out.
    pub fn move_tetromino_down(&mut self, movement_type: MovementType) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        // A player-initiated fall also reschedules the next automatic one.
        if movement_type == MovementType::Forced {
            self.next_gravity_step = self.step + self.gravity_delay();
        }

        let moved = active.moved_by(0, 1);
        if self.is_tetromino_position_valid(&moved) {
            self.active = Some(moved);
            self.reset_lock_delay();
            return true;
        }

        if !self.is_in_lock_delay {
            self.is_in_lock_delay = true;
            self.lock_delay_expiry_step = self.step + LOCK_DELAY_TICKS;
        }
        false
    }

    /// Hard drop: translate straight down until blocked, then lock
    /// immediately with no lock-delay grace.
    pub fn drop_tetromino(&mut self) -> bool {
        let Some(mut active) = self.active else {
            return false;
        };

        let mut distance: u32 = 0;
        while self.is_tetromino_position_valid(&active.moved_by(0, 1)) {
            active = active.moved_by(0, 1);
            distance += 1;
        }
        self.active = Some(active);
        self.score += distance * HARD_DROP_SCORE_PER_CELL;
        self.lock_active_tetromino();
        true
    }

    /// Swap the active piece with the held one, or stash it and spawn the
    /// next piece if nothing is held yet. Allowed once per spawn.
    pub fn hold_tetromino(&mut self) -> bool {
        if !self.allowed_to_hold {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match self.held.take() {
            Some(held) => {
                self.held = Some(Tetromino::spawn(active.kind));
                self.spawn_tetromino(held.kind);
            }
            None => {
                self.held = Some(Tetromino::spawn(active.kind));
                self.spawn_next_tetromino();
            }
        }
        self.allowed_to_hold = false;
        true
    }

    /// Spawn the next piece from the bag sequence and refresh the preview.
    pub fn spawn_next_tetromino(&mut self) {
        let kind = self.next_tetromino_type();
        self.refresh_preview();
        self.spawn_tetromino(kind);
    }

    /// Spawn a specific piece type (bag bypass, also used by hold swaps).
    /// An invalid spawn position is the sole game-over condition.
    pub fn spawn_tetromino(&mut self, kind: TetrominoType) {
        let piece = Tetromino::spawn(kind);
        self.active = Some(piece);
        self.allowed_to_hold = true;
        self.reset_lock_delay();
        self.next_gravity_step = self.step + self.gravity_delay();

        if !self.is_tetromino_position_valid(&piece) {
            self.state = GameState::GameOver;
            self.ghost = None;
            return;
        }
        self.refresh_ghost_tetromino();
    }

    /// Reset to a fresh game with the same seed (and recording mode).
    pub fn restart(&mut self) {
        *self = Self::new(self.seed, self.recording.is_some());
    }

    fn next_tetromino_type(&mut self) -> TetrominoType {
        let next = self.sequence_bags[0].get(self.sequence_index);
        self.sequence_index += 1;
        if self.sequence_index >= Bag::SIZE {
            self.sequence_index = 0;
            self.sequence_bags[0] = self.sequence_bags[1];
            self.sequence_bags[1] = Bag::new(&mut self.rng);
        }
        next
    }

    fn refresh_preview(&mut self) {
        // The cursor never sits past the bag, so the preview needs no refill.
        let kind = self.sequence_bags[0].get(self.sequence_index);
        self.preview = Some(Tetromino::spawn(kind));
    }

    /// Commit the active piece into the grid, clear full rows, update the
    /// counters, and spawn the successor.
    fn lock_active_tetromino(&mut self) {
        let active = self
            .active
            .take()
            .unwrap_or_else(|| unreachable!("lock without an active piece"));
        assert!(
            active.cells().iter().all(|&cell| self.grid.is_cell_free(cell)),
            "locking an invalid piece position would corrupt the grid"
        );

        for cell in active.cells() {
            self.grid.set_cell(cell, active.kind);
        }

        let cleared = self.grid.clear_fully_occupied_lines();
        if !cleared.is_empty() {
            self.lines_cleared += cleared.len() as u32;
            self.score += LINE_CLEAR_SCORES[cleared.len()] * (self.level + 1);
            self.level = self.lines_cleared / LINES_PER_LEVEL;
        }

        self.allowed_to_hold = true;
        self.reset_lock_delay();
        self.spawn_next_tetromino();
    }

    fn reset_lock_delay(&mut self) {
        self.is_in_lock_delay = false;
        self.executed_lock_delays = 0;
    }

    /// Ticks between automatic falls at the current level, with the
    /// accelerated divisor applied while soft drop is held.
    fn gravity_delay(&self) -> u64 {
        let level = (self.level as usize).min(FRAMES_PER_TILE.len() - 1);
        let frames = FRAMES_PER_TILE[level];
        if self.is_accelerated_down_movement {
            // Integer round-half-up keeps the core float-free.
            ((frames + ACCELERATED_GRAVITY_DIVISOR / 2) / ACCELERATED_GRAVITY_DIVISOR).max(1)
        } else {
            frames
        }
    }

    fn refresh_ghost_tetromino(&mut self) {
        let Some(piece) = self.active else {
            self.ghost = None;
            return;
        };
        if self.state == GameState::GameOver {
            self.ghost = None;
            return;
        }
        let mut ghost = piece;
        while self.is_tetromino_position_valid(&ghost.moved_by(0, 1)) {
            ghost = ghost.moved_by(0, 1);
        }
        self.ghost = Some(ghost);
    }

    fn is_tetromino_position_valid(&self, piece: &Tetromino) -> bool {
        piece.cells().iter().all(|&cell| self.grid.is_cell_free(cell))
    }

    pub fn is_active_tetromino_position_valid(&self) -> bool {
        self.active
            .as_ref()
            .map_or(false, |piece| self.is_tetromino_position_valid(piece))
    }

    fn can_move_down(&self) -> bool {
        self.active
            .map_or(false, |piece| self.is_tetromino_position_valid(&piece.moved_by(0, 1)))
    }

    // Read-only accessors for observers (renderer, tests, replay).

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active_tetromino(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn ghost_tetromino(&self) -> Option<Tetromino> {
        self.ghost
    }

    pub fn preview_tetromino(&self) -> Option<Tetromino> {
        self.preview
    }

    pub fn held_tetromino(&self) -> Option<Tetromino> {
        self.held
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn recording(&self) -> Option<&Recording> {
        self.recording.as_ref()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cells.copy_from_slice(self.grid.cells());
        out.active = self.active.map(Into::into);
        out.ghost = self.ghost.map(Into::into);
        out.preview = self.preview.map(|piece| piece.kind);
        out.held = self.held.map(|piece| piece.kind);
        out.score = self.score;
        out.level = self.level;
        out.lines_cleared = self.lines_cleared;
        out.state = self.state;
        out.step = self.step;
        out.seed = self.seed;
    }

    #[cfg(test)]
    fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfall_types::{Point, GRID_HEIGHT, GRID_WIDTH};

    #[test]
    fn new_game_spawns_active_and_preview() {
        let manager = GameManager::new(12345, false);
        assert_eq!(manager.game_state(), GameState::Playing);
        assert!(manager.active_tetromino().is_some());
        assert!(manager.preview_tetromino().is_some());
        assert!(manager.ghost_tetromino().is_some());
        assert!(manager.held_tetromino().is_none());
        assert_eq!(manager.score(), 0);
        assert_eq!(manager.level(), 0);
        assert_eq!(manager.lines_cleared(), 0);
        assert_eq!(manager.step(), 0);
    }

    #[test]
    fn gravity_fires_every_48_ticks_at_level_0() {
        let mut manager = GameManager::new(1, false);
        let spawn_y = manager.active_tetromino().unwrap().position.y;

        for _ in 0..47 {
            manager.update();
        }
        assert_eq!(manager.active_tetromino().unwrap().position.y, spawn_y);

        manager.update();
        assert_eq!(manager.active_tetromino().unwrap().position.y, spawn_y + 1);

        // And again 48 ticks later.
        for _ in 0..48 {
            manager.update();
        }
        assert_eq!(manager.active_tetromino().unwrap().position.y, spawn_y + 2);
    }

    #[test]
    fn gravity_delay_clamps_past_the_table() {
        let mut manager = GameManager::new(1, false);
        manager.level = 29;
        assert_eq!(manager.gravity_delay(), 1);
        manager.level = 200;
        assert_eq!(manager.gravity_delay(), 1);
    }

    #[test]
    fn accelerated_delay_is_divided_and_floored() {
        let mut manager = GameManager::new(1, false);
        manager.is_accelerated_down_movement = true;
        // max(1, round(48 / 20)) = 2 at level 0.
        assert_eq!(manager.gravity_delay(), 2);
        manager.level = 29;
        assert_eq!(manager.gravity_delay(), 1);
    }

    #[test]
    fn soft_drop_release_restores_schedule() {
        let mut manager = GameManager::new(1, false);
        manager.handle_input_event(InputEvent::MoveDown);
        assert!(manager.is_accelerated_down_movement);
        manager.handle_input_event(InputEvent::ReleaseMoveDown);
        assert!(!manager.is_accelerated_down_movement);
        assert_eq!(manager.next_gravity_step, manager.step() + 48);
    }

    #[test]
    fn failed_down_move_starts_lock_delay() {
        let mut manager = GameManager::new(1, false);
        while manager.move_tetromino_down(MovementType::Gravity) {}
        assert!(manager.is_in_lock_delay);
        assert_eq!(
            manager.lock_delay_expiry_step,
            manager.step() + LOCK_DELAY_TICKS
        );
    }

    #[test]
    fn piece_locks_after_lock_delay_elapses() {
        let mut manager = GameManager::new(1, false);
        while manager.move_tetromino_down(MovementType::Gravity) {}
        let resting = manager.active_tetromino().unwrap();

        for _ in 0..=LOCK_DELAY_TICKS {
            manager.update();
        }

        // The resting piece was committed to the grid and a new one spawned.
        for cell in resting.cells() {
            assert!(manager.grid().is_cell_occupied(cell));
        }
        assert_ne!(manager.active_tetromino().unwrap().cells(), resting.cells());
    }

    #[test]
    fn lateral_moves_during_lock_delay_consume_bounded_grace() {
        let mut manager = GameManager::new(1, false);
        while manager.move_tetromino_down(MovementType::Gravity) {}
        assert!(manager.is_in_lock_delay);

        // Each successful wiggle resets the timer but burns one grace use;
        // once they run out the very next tick locks the piece regardless.
        let mut grace_moves: u32 = 0;
        for i in 0..40 {
            let event = if i % 2 == 0 {
                InputEvent::MoveLeft
            } else {
                InputEvent::MoveRight
            };
            assert!(manager.handle_input_event(event));
            grace_moves += 1;
            manager.update();
            if !manager.is_in_lock_delay {
                break;
            }
        }
        assert!(!manager.is_in_lock_delay, "stalling forever must be impossible");
        assert_eq!(grace_moves, MAX_LOCK_DELAY_RESETS);
    }

    #[test]
    fn hard_drop_locks_immediately_and_scores_distance() {
        let mut manager = GameManager::new(1, false);
        let active = manager.active_tetromino().unwrap();
        let ghost = manager.ghost_tetromino().unwrap();
        let distance = (ghost.position.y - active.position.y) as u32;

        assert!(manager.handle_input_event(InputEvent::Drop));
        assert_eq!(manager.score(), distance * HARD_DROP_SCORE_PER_CELL);
        for cell in ghost.cells() {
            assert!(manager.grid().is_cell_occupied(cell));
        }
        // A fresh piece is already falling.
        assert!(manager.active_tetromino().is_some());
        assert!(!manager.is_in_lock_delay);
    }

    #[test]
    fn hold_swaps_once_per_spawn() {
        let mut manager = GameManager::new(12345, false);
        let first = manager.active_tetromino().unwrap().kind;
        let previewed = manager.preview_tetromino().unwrap().kind;

        assert!(manager.handle_input_event(InputEvent::Hold));
        assert_eq!(manager.held_tetromino().unwrap().kind, first);
        assert_eq!(manager.active_tetromino().unwrap().kind, previewed);

        // Second hold before a lock is rejected.
        assert!(!manager.handle_input_event(InputEvent::Hold));

        // After a lock, holding swaps back.
        manager.drop_tetromino();
        assert!(manager.handle_input_event(InputEvent::Hold));
        assert_eq!(manager.active_tetromino().unwrap().kind, first);
    }

    #[test]
    fn preview_always_matches_the_next_spawn() {
        let mut manager = GameManager::new(777, false);
        // Cross two bag boundaries to exercise the bag swap; spread the
        // pieces across the grid so the stack stays below the spawn region.
        for i in 0..14 {
            let previewed = manager.preview_tetromino().unwrap().kind;
            let (event, nudges) = match i % 3 {
                0 => (InputEvent::MoveLeft, 5),
                1 => (InputEvent::MoveRight, 5),
                _ => (InputEvent::MoveRight, 0),
            };
            for _ in 0..nudges {
                manager.handle_input_event(event);
            }
            manager.drop_tetromino();
            assert_eq!(manager.game_state(), GameState::Playing, "piece {i}");
            assert_eq!(manager.active_tetromino().unwrap().kind, previewed);
        }
    }

    #[test]
    fn bag_sequence_has_no_early_repeats() {
        let mut manager = GameManager::new(31337, false);
        let mut kinds = vec![manager.active_tetromino().unwrap().kind];
        for _ in 0..13 {
            kinds.push(manager.next_tetromino_type());
        }
        for window in kinds.chunks(7) {
            for kind in TetrominoType::ALL {
                assert_eq!(window.iter().filter(|&&k| k == kind).count(), 1);
            }
        }
    }

    #[test]
    fn simultaneous_tetris_scores_1200_times_level_factor() {
        let mut manager = GameManager::new(1, false);
        // Fill the bottom four rows except the rightmost column.
        for y in (GRID_HEIGHT - 4) as i8..GRID_HEIGHT as i8 {
            for x in 0..(GRID_WIDTH - 1) as i8 {
                manager.grid_mut().set_cell(Point::new(x, y), TetrominoType::J);
            }
        }
        // A vertical I dropped down the free column clears all four at once.
        manager.active = Some(Tetromino {
            kind: TetrominoType::I,
            rotation: Rotation::East,
            position: Point::new(7, 0),
        });
        manager.score = 0;

        manager.drop_tetromino();
        assert_eq!(manager.lines_cleared(), 4);
        // 1200 * (level 0 + 1) plus the hard-drop distance bonus.
        let drop_bonus = manager.score() - 1200;
        assert!(drop_bonus < 1200);
        assert!(manager.score() >= 1200);
        // Strictly better than four singles.
        assert!(1200 > 4 * LINE_CLEAR_SCORES[1]);
    }

    #[test]
    fn level_rises_every_ten_lines_and_scales_scoring() {
        let mut manager = GameManager::new(1, false);
        // Sixteen prefilled rows with the rightmost column free; each vertical
        // I dropped down that column clears four of them.
        for y in 4..GRID_HEIGHT as i8 {
            for x in 0..(GRID_WIDTH - 1) as i8 {
                manager.grid_mut().set_cell(Point::new(x, y), TetrominoType::L);
            }
        }
        let vertical_i = Tetromino {
            kind: TetrominoType::I,
            rotation: Rotation::East,
            position: Point::new(7, 0),
        };
        // The anchor falls 16 rows on every drop below.
        let drop_bonus = 16 * HARD_DROP_SCORE_PER_CELL;

        // Twelve lines: the first three tetrises are all scored at level 0.
        for clear in 0..3u32 {
            manager.active = Some(vertical_i);
            let before = manager.score();
            manager.drop_tetromino();
            assert_eq!(
                manager.score() - before,
                drop_bonus + LINE_CLEAR_SCORES[4],
                "clear {clear}"
            );
        }
        assert_eq!(manager.lines_cleared(), 12);
        assert_eq!(manager.level(), 1);
        assert_eq!(manager.gravity_delay(), FRAMES_PER_TILE[1]);

        // The next clear carries the level + 1 multiplier.
        manager.active = Some(vertical_i);
        let before = manager.score();
        manager.drop_tetromino();
        assert_eq!(manager.score() - before, drop_bonus + LINE_CLEAR_SCORES[4] * 2);
        assert_eq!(manager.lines_cleared(), 16);
        assert_eq!(manager.level(), 1);
    }

    #[test]
    fn blocked_spawn_is_the_sole_game_over_trigger() {
        let mut manager = GameManager::new(1, false);
        // Wall off the whole spawn region.
        for y in 0..4 {
            for x in 0..GRID_WIDTH as i8 {
                manager.grid_mut().set_cell(Point::new(x, y), TetrominoType::Z);
            }
        }
        manager.spawn_next_tetromino();
        assert_eq!(manager.game_state(), GameState::GameOver);
        assert!(manager.ghost_tetromino().is_none());

        // No further mutation is possible.
        let score = manager.score();
        let cells = manager.grid().cells().to_vec();
        let step = manager.step();
        assert!(!manager.handle_input_event(InputEvent::MoveLeft));
        assert!(!manager.handle_input_event(InputEvent::Drop));
        manager.update();
        assert_eq!(manager.score(), score);
        assert_eq!(manager.grid().cells(), &cells[..]);
        assert_eq!(manager.step(), step);
    }

    #[test]
    fn ghost_projects_straight_down_to_collision() {
        let mut manager = GameManager::new(1, false);
        let ghost = manager.ghost_tetromino().unwrap();
        let active = manager.active_tetromino().unwrap();

        assert_eq!(ghost.kind, active.kind);
        assert_eq!(ghost.rotation, active.rotation);
        assert!(ghost.position.y >= active.position.y);
        // One row lower would collide.
        assert!(!manager.is_tetromino_position_valid(&ghost.moved_by(0, 1)));
    }

    #[test]
    fn recording_captures_seed_and_tagged_events() {
        let mut manager = GameManager::new(555, true);
        manager.update();
        manager.handle_input_event(InputEvent::MoveLeft);
        manager.update();
        manager.handle_input_event(InputEvent::Drop);

        let recording = manager.recording().unwrap();
        assert_eq!(recording.seed(), 555);
        assert_eq!(recording.events().len(), 2);
        assert_eq!(recording.events()[0].step, 1);
        assert_eq!(recording.events()[0].event, InputEvent::MoveLeft);
        assert_eq!(recording.events()[1].step, 2);
        assert_eq!(recording.events()[1].event, InputEvent::Drop);
    }

    #[test]
    fn restart_resets_everything_but_the_seed() {
        let mut manager = GameManager::new(9000, false);
        manager.drop_tetromino();
        for _ in 0..100 {
            manager.update();
        }
        manager.restart();
        assert_eq!(manager.seed(), 9000);
        assert_eq!(manager.step(), 0);
        assert_eq!(manager.score(), 0);
        assert!(manager.grid().cells().iter().all(|c| c.is_none()));
        // Same seed, same first piece.
        let fresh = GameManager::new(9000, false);
        assert_eq!(
            manager.active_tetromino().unwrap().kind,
            fresh.active_tetromino().unwrap().kind
        );
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut manager = GameManager::new(4242, false);
        manager.handle_input_event(InputEvent::MoveRight);
        manager.update();

        let snapshot = manager.snapshot();
        assert_eq!(snapshot.seed, 4242);
        assert_eq!(snapshot.step, 1);
        assert_eq!(snapshot.state, GameState::Playing);
        assert_eq!(
            snapshot.active.unwrap().position,
            manager.active_tetromino().unwrap().position
        );
        assert_eq!(snapshot.preview, manager.preview_tetromino().map(|p| p.kind));
        assert_eq!(snapshot.cells.as_slice(), manager.grid().cells());
    }
}
