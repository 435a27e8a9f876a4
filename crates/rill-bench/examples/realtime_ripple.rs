//! Rill `RealtimeSession`: background-threaded animation with concurrent
//! frame reads.
//!
//! Demonstrates:
//!   1. Spawning a `RealtimeSession` with a background tick thread
//!   2. Submitting pointer commands to the tick thread
//!   3. Reading frames while ticks happen in the background
//!   4. Watching the tick id advance across reads
//!   5. Stopping the thread and recovering the session state
//!
//! # Lockstep vs. realtime
//!
//! In **lockstep** mode (`Session`), the caller drives each tick
//! explicitly via `tick()`. The animation advances exactly one tick
//! per call, making it fully deterministic and easy to test.
//!
//! In **realtime** mode (`RealtimeSession`), a dedicated thread
//! advances the animation at the configured tick interval. The caller
//! submits commands asynchronously and reads the latest frame at its
//! own pace. This is the mode interactive hosts use, where the
//! animation must keep flowing independently of input latency.
//!
//! Run with:
//!   cargo run --example realtime_ripple

use std::thread;
use std::time::Duration;

use rill_bench::ripple_art;
use rill_core::{Cell, Command, GridDims};
use rill_engine::{RealtimeSession, SessionConfig};
use rill_glyph::{GlyphFrame, RenderStyle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Rill Realtime Example ===\n");

    // 1. Build the session config: 32x12 ripple backdrop, overlay
    //    rendering, 40ms tick interval (25 Hz).
    let dims = GridDims::new(32, 12)?;
    let mut config = SessionConfig::new(dims);
    config.art = Some(ripple_art(32, 12));
    config.style = RenderStyle::art_overlay();
    config.tick_interval = Duration::from_millis(40);
    config.seed = 7;

    // 2. Spawn the realtime session.
    //
    //    This starts a dedicated tick thread ("rill-tick") that drains
    //    queued commands, steps the solver, and publishes a frame once
    //    per tick interval. In lockstep mode you'd call
    //    Session::new(config) and drive ticks manually with tick().
    let mut session = RealtimeSession::spawn(config)?;
    println!("RealtimeSession spawned, ticking every 40ms");

    // 3. A frame is always available: the backdrop is published at
    //    tick 0, before the thread advances at all.
    println!("\nInitial frame (tick {}):", session.current_tick().0);
    print_frame(&session.latest_frame());

    // 4. Submit commands while the animation runs.
    //
    //    submit() is non-blocking: the command goes into a bounded
    //    queue and is applied at the start of the next tick. When the
    //    queue is full it returns SubmitError::ChannelFull instead of
    //    blocking, and the session counts the rejection.
    println!("\nSubmitting a tap and a pointer drag...");
    session.submit(Command::Tap {
        cell: Cell::new(16, 6),
    })?;
    for x in 10..22 {
        session.submit(Command::PointerMove {
            cell: Cell::new(x, 4),
        })?;
        thread::sleep(Duration::from_millis(10));
    }

    // 5. Read frames while the tick thread runs in the background.
    //    The tick id advances between reads without any call from us.
    for read in 0..4 {
        thread::sleep(Duration::from_millis(200));
        let frame = session.latest_frame();
        println!("\nRead {}: tick {}", read + 1, frame.tick.0);
        if read == 0 || read == 3 {
            print_frame(&frame);
        }
    }

    // 6. Let the splash fade. With no further input, decay and the
    //    restore blend pull every cell back toward the backdrop.
    thread::sleep(Duration::from_millis(1500));
    let frame = session.latest_frame();
    println!("\nAfter fading (tick {}):", frame.tick.0);
    print_frame(&frame);

    // 7. Stop the tick thread and recover the session. Dropping the
    //    handle would also stop the thread, but stop() hands the final
    //    session state back for inspection.
    println!("\nStopping...");
    let recovered = session.stop()?;
    let metrics = recovered.metrics();
    println!("Recovered session after {} ticks:", metrics.ticks);
    println!("  commands_applied:      {}", metrics.commands_applied);
    println!("  queue_full_rejections: {}", metrics.queue_full_rejections);
    println!(
        "  last tick: total={}μs (commands={}μs, step={}μs, render={}μs)",
        metrics.total_us, metrics.command_processing_us, metrics.step_us, metrics.render_us,
    );

    println!("\nDone.");
    Ok(())
}

fn print_frame(frame: &GlyphFrame) {
    let width = frame.rows.first().map_or(0, |row| row.len());
    println!("  +{}+", "-".repeat(width));
    for row in &frame.rows {
        println!("  |{row}|");
    }
    println!("  +{}+", "-".repeat(width));
}
