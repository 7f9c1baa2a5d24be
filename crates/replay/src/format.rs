//! JSON wire format for recordings.
//!
//! Wire structs are kept separate from the engine types so the on-disk
//! format can stay stable while the engine evolves.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{RecordedEvent, Recording};
use crate::types::InputEvent;

/// Current wire format version. Bumped on incompatible changes.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayFile {
    pub version: u32,
    pub seed: u32,
    pub events: Vec<WireEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEvent {
    pub step: u64,
    pub event: WireInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WireInput {
    RotateLeft,
    RotateRight,
    MoveLeft,
    MoveRight,
    MoveDown,
    ReleaseMoveDown,
    Drop,
    Hold,
}

impl From<InputEvent> for WireInput {
    fn from(value: InputEvent) -> Self {
        match value {
            InputEvent::RotateLeft => Self::RotateLeft,
            InputEvent::RotateRight => Self::RotateRight,
            InputEvent::MoveLeft => Self::MoveLeft,
            InputEvent::MoveRight => Self::MoveRight,
            InputEvent::MoveDown => Self::MoveDown,
            InputEvent::ReleaseMoveDown => Self::ReleaseMoveDown,
            InputEvent::Drop => Self::Drop,
            InputEvent::Hold => Self::Hold,
        }
    }
}

impl From<WireInput> for InputEvent {
    fn from(value: WireInput) -> Self {
        match value {
            WireInput::RotateLeft => Self::RotateLeft,
            WireInput::RotateRight => Self::RotateRight,
            WireInput::MoveLeft => Self::MoveLeft,
            WireInput::MoveRight => Self::MoveRight,
            WireInput::MoveDown => Self::MoveDown,
            WireInput::ReleaseMoveDown => Self::ReleaseMoveDown,
            WireInput::Drop => Self::Drop,
            WireInput::Hold => Self::Hold,
        }
    }
}

impl From<&Recording> for ReplayFile {
    fn from(recording: &Recording) -> Self {
        Self {
            version: FORMAT_VERSION,
            seed: recording.seed(),
            events: recording
                .events()
                .iter()
                .map(|e| WireEvent {
                    step: e.step,
                    event: e.event.into(),
                })
                .collect(),
        }
    }
}

impl ReplayFile {
    pub fn into_recording(self) -> Recording {
        Recording::from_parts(
            self.seed,
            self.events
                .into_iter()
                .map(|e| RecordedEvent {
                    step: e.step,
                    event: e.event.into(),
                })
                .collect(),
        )
    }
}

pub fn to_json(recording: &Recording) -> Result<String> {
    serde_json::to_string(&ReplayFile::from(recording)).context("serializing recording")
}

pub fn from_json(json: &str) -> Result<Recording> {
    let file: ReplayFile = serde_json::from_str(json).context("parsing recording JSON")?;
    if file.version != FORMAT_VERSION {
        bail!(
            "unsupported recording version {} (expected {})",
            file.version,
            FORMAT_VERSION
        );
    }
    if !file.events.windows(2).all(|w| w[0].step <= w[1].step) {
        bail!("recording events are not in step order");
    }
    Ok(file.into_recording())
}

pub fn save_recording(recording: &Recording, path: &Path) -> Result<()> {
    let json = to_json(recording)?;
    fs::write(path, json).with_context(|| format!("writing recording to {}", path.display()))
}

pub fn load_recording(path: &Path) -> Result<Recording> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading recording from {}", path.display()))?;
    from_json(&json)
}
