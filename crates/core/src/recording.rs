//! Input-event recording for deterministic replay.
//!
//! A recording is the initial RNG seed plus an ordered, appendable log of
//! (simulation step, input event) pairs. Together with the same engine build
//! it reproduces an entire game bit for bit. Persistence is delegated to the
//! `gridfall-replay` crate; this stays plain data.

use gridfall_types::InputEvent;

/// One logged input, tagged with the step index at which it was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedEvent {
    pub step: u64,
    pub event: InputEvent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recording {
    seed: u32,
    events: Vec<RecordedEvent>,
}

impl Recording {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            events: Vec::new(),
        }
    }

    /// Rebuild a recording from persisted parts. Events must already be in
    /// non-decreasing step order; the replay driver relies on it.
    pub fn from_parts(seed: u32, events: Vec<RecordedEvent>) -> Self {
        debug_assert!(events.windows(2).all(|w| w[0].step <= w[1].step));
        Self { seed, events }
    }

    /// Append an event. Steps are monotonic because the Game Manager only
    /// ever records at its current simulation step.
    pub fn push(&mut self, step: u64, event: InputEvent) {
        debug_assert!(self.events.last().map_or(true, |last| last.step <= step));
        self.events.push(RecordedEvent { step, event });
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
