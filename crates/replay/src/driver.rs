//! Deterministic playback of a recording through a fresh engine.
//!
//! The driver mirrors the live host loop exactly: for each tick it first
//! hands the manager every event recorded at the current step, then calls
//! `update()`. Because gravity and lock delay are scheduled purely against
//! the step index, this reproduces the original session tick for tick.

use crate::core::{GameManager, Recording};
use crate::types::GameState;

pub struct ReplayDriver {
    manager: GameManager,
    recording: Recording,
    cursor: usize,
}

impl ReplayDriver {
    pub fn new(recording: Recording) -> Self {
        Self {
            manager: GameManager::new(recording.seed(), false),
            recording,
            cursor: 0,
        }
    }

    /// Advance one tick: apply the events recorded at the current step, then
    /// step the simulation.
    pub fn tick(&mut self) {
        let events = self.recording.events();
        while self.cursor < events.len() && events[self.cursor].step == self.manager.step() {
            self.manager.handle_input_event(events[self.cursor].event);
            self.cursor += 1;
        }
        self.manager.update();
    }

    /// All recorded events consumed, or the game ended early.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.recording.events().len()
            || self.manager.game_state() == GameState::GameOver
    }

    pub fn manager(&self) -> &GameManager {
        &self.manager
    }

    /// Run playback until the simulation reaches `target_step`, consuming
    /// events along the way. Used to line a replay up against a live session
    /// that ran for a known number of ticks.
    pub fn run_to_step(mut self, target_step: u64) -> GameManager {
        while self.manager.step() < target_step
            && self.manager.game_state() != GameState::GameOver
        {
            self.tick();
        }
        self.manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InputEvent;

    #[test]
    fn replay_of_scripted_inputs_matches_live_session() {
        let seed = 20260827;
        let mut live = GameManager::new(seed, true);

        // A scripted session: wiggle, rotate, soft drop, two hard drops.
        let script: &[(u64, InputEvent)] = &[
            (3, InputEvent::MoveLeft),
            (3, InputEvent::MoveLeft),
            (7, InputEvent::RotateRight),
            (20, InputEvent::MoveDown),
            (30, InputEvent::ReleaseMoveDown),
            (45, InputEvent::Drop),
            (60, InputEvent::MoveRight),
            (80, InputEvent::Hold),
            (95, InputEvent::Drop),
        ];
        let total_steps = 200;

        let mut next = 0;
        for _ in 0..total_steps {
            while next < script.len() && script[next].0 == live.step() {
                live.handle_input_event(script[next].1);
                next += 1;
            }
            live.update();
        }

        let recording = live.recording().unwrap().clone();
        let replayed = ReplayDriver::new(recording).run_to_step(total_steps);

        assert_eq!(replayed.snapshot(), live.snapshot());
    }

    #[test]
    fn replay_survives_json_round_trip() {
        let seed = 99;
        let mut live = GameManager::new(seed, true);
        for _ in 0..60 {
            if live.step() == 10 {
                live.handle_input_event(InputEvent::RotateLeft);
            }
            if live.step() == 25 {
                live.handle_input_event(InputEvent::Drop);
            }
            live.update();
        }

        let json = crate::format::to_json(live.recording().unwrap()).unwrap();
        let recording = crate::format::from_json(&json).unwrap();
        let replayed = ReplayDriver::new(recording).run_to_step(60);

        assert_eq!(replayed.snapshot(), live.snapshot());
    }

    #[test]
    fn driver_finishes_after_last_event() {
        let mut recording = Recording::new(5);
        recording.push(2, InputEvent::Drop);

        let mut driver = ReplayDriver::new(recording);
        assert!(!driver.is_finished());
        for _ in 0..3 {
            driver.tick();
        }
        assert!(driver.is_finished());
    }

    #[test]
    fn empty_recording_is_immediately_finished() {
        let driver = ReplayDriver::new(Recording::new(1));
        assert!(driver.is_finished());
    }
}
