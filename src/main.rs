//! Gridfall terminal runner (default binary).
//!
//! Drives the simulation on a fixed 16 ms timestep: queued key events are
//! fed to the Game Manager first, then the tick fires. With `--record` the
//! session's seed and inputs are written out on exit; `--replay` feeds a
//! saved session back through a fresh engine at the same cadence.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{GameManager, GameSnapshot, Recording};
use gridfall::input::{map_key_event, should_quit, should_restart};
use gridfall::replay::{load_recording, save_recording, ReplayDriver};
use gridfall::term::{CellStyle, FrameBuffer, GameView, Rgb, TerminalRenderer, Viewport};
use gridfall::types::SIMULATION_TICK_MS;

struct Options {
    seed: u32,
    record: Option<PathBuf>,
    replay: Option<PathBuf>,
}

fn parse_args() -> Result<Options> {
    let mut options = Options {
        seed: clock_seed(),
        record: None,
        replay: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().context("--seed needs a value")?;
                options.seed = value.parse().context("--seed must be a u32")?;
            }
            "--record" => {
                let value = args.next().context("--record needs a file path")?;
                options.record = Some(PathBuf::from(value));
            }
            "--replay" => {
                let value = args.next().context("--replay needs a file path")?;
                options.replay = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => bail!("unknown argument: {other} (try --help)"),
        }
    }

    if options.record.is_some() && options.replay.is_some() {
        bail!("--record and --replay are mutually exclusive");
    }
    Ok(options)
}

fn print_usage() {
    println!("usage: gridfall [--seed N] [--record FILE | --replay FILE]");
    println!();
    println!("  --seed N       fixed RNG seed (default: derived from the clock)");
    println!("  --record FILE  save the session's inputs as JSON on exit");
    println!("  --replay FILE  play back a saved session");
    println!();
    println!("keys: arrows/hjkl move, z rotate left, up/w rotate right,");
    println!("      space hard drop, c hold, r restart, q quit");
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    let options = parse_args()?;

    if let Some(path) = &options.replay {
        // Load before touching the terminal so errors print normally.
        let recording = load_recording(path)?;
        let mut term = TerminalRenderer::new();
        term.enter()?;
        let result = run_replay(&mut term, recording);
        let _ = term.exit();
        return result;
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run_live(&mut term, options.seed, options.record.is_some());
    let _ = term.exit();

    let recording = result?;
    if let (Some(path), Some(recording)) = (&options.record, recording) {
        save_recording(&recording, path)?;
        println!("recording saved to {}", path.display());
    }
    Ok(())
}

fn run_live(term: &mut TerminalRenderer, seed: u32, record: bool) -> Result<Option<Recording>> {
    let mut manager = GameManager::new(seed, record);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snapshot = GameSnapshot::default();

    let tick = Duration::from_millis(SIMULATION_TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        manager.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next tick.
        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        if should_quit(key) {
                            break;
                        }
                        if should_restart(key) {
                            manager.restart();
                            continue;
                        }
                    }
                    if let Some(input) = map_key_event(key) {
                        manager.handle_input_event(input);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            manager.update();
        }
    }

    Ok(manager.recording().cloned())
}

fn run_replay(term: &mut TerminalRenderer, recording: Recording) -> Result<()> {
    let mut driver = ReplayDriver::new(recording);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snapshot = GameSnapshot::default();

    let badge = CellStyle {
        fg: Rgb::new(240, 220, 80),
        bg: Rgb::new(0, 0, 0),
        bold: true,
        dim: false,
    };

    let tick = Duration::from_millis(SIMULATION_TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        driver.manager().snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        fb.put_str(1, 0, "REPLAY", badge);
        if driver.is_finished() {
            fb.put_str(1, 1, "done - q to quit", badge);
        }
        term.draw_swap(&mut fb)?;

        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            if !driver.is_finished() {
                driver.tick();
            }
        }
    }

    Ok(())
}
