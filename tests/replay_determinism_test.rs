//! Replay determinism - a recorded session replays to identical snapshots

use gridfall::core::{GameManager, GameSnapshot};
use gridfall::replay::{from_json, load_recording, save_recording, to_json, ReplayDriver};
use gridfall::types::{GameState, InputEvent};

/// Play a scripted session live with recording enabled, checkpointing the
/// snapshot at a few steps along the way.
fn play_live(seed: u32, total_steps: u64, checkpoints: &[u64]) -> (GameManager, Vec<GameSnapshot>) {
    let script: &[(u64, InputEvent)] = &[
        (2, InputEvent::MoveRight),
        (2, InputEvent::MoveRight),
        (5, InputEvent::RotateLeft),
        (10, InputEvent::MoveDown),
        (24, InputEvent::ReleaseMoveDown),
        (40, InputEvent::Drop),
        (55, InputEvent::Hold),
        (70, InputEvent::MoveLeft),
        (90, InputEvent::Drop),
        (120, InputEvent::Hold),
        (150, InputEvent::Drop),
    ];

    let mut manager = GameManager::new(seed, true);
    let mut snapshots = Vec::new();
    let mut next = 0;

    for _ in 0..total_steps {
        while next < script.len() && script[next].0 == manager.step() {
            manager.handle_input_event(script[next].1);
            next += 1;
        }
        if checkpoints.contains(&manager.step()) {
            snapshots.push(manager.snapshot());
        }
        manager.update();
    }
    (manager, snapshots)
}

#[test]
fn test_replay_reproduces_final_state() {
    let (live, _) = play_live(20260827, 400, &[]);
    assert_eq!(live.game_state(), GameState::Playing);

    let recording = live.recording().unwrap().clone();
    let replayed = ReplayDriver::new(recording).run_to_step(400);

    assert_eq!(replayed.snapshot(), live.snapshot());
}

#[test]
fn test_replay_matches_at_intermediate_checkpoints() {
    let checkpoints = [50, 100, 200, 300];
    let (live, live_snapshots) = play_live(98765, 350, &checkpoints);
    assert_eq!(live_snapshots.len(), checkpoints.len());

    let mut driver = ReplayDriver::new(live.recording().unwrap().clone());
    for (checkpoint, expected) in checkpoints.iter().zip(&live_snapshots) {
        while driver.manager().step() < *checkpoint {
            driver.tick();
        }
        assert_eq!(&driver.manager().snapshot(), expected, "step {checkpoint}");
    }
}

#[test]
fn test_replay_survives_serialization() {
    let (live, _) = play_live(555, 300, &[]);

    let json = to_json(live.recording().unwrap()).unwrap();
    let recording = from_json(&json).unwrap();
    let replayed = ReplayDriver::new(recording).run_to_step(300);

    assert_eq!(replayed.snapshot(), live.snapshot());
}

#[test]
fn test_replay_survives_a_file_round_trip() {
    let (live, _) = play_live(314159, 250, &[]);

    let path = std::env::temp_dir().join("gridfall-replay-roundtrip-test.json");
    save_recording(live.recording().unwrap(), &path).unwrap();
    let recording = load_recording(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let replayed = ReplayDriver::new(recording).run_to_step(250);
    assert_eq!(replayed.snapshot(), live.snapshot());
}

#[test]
fn test_recording_is_append_only_and_step_tagged() {
    let (live, _) = play_live(1, 200, &[]);
    let recording = live.recording().unwrap();

    assert_eq!(recording.seed(), 1);
    assert!(!recording.is_empty());
    assert!(recording
        .events()
        .windows(2)
        .all(|w| w[0].step <= w[1].step));
    // The script's first input landed at step 2.
    assert_eq!(recording.events()[0].step, 2);
    assert_eq!(recording.events()[0].event, InputEvent::MoveRight);
}
