//! End-to-end lockstep animation loop example.
//!
//! Demonstrates: build config → Session → apply commands → tick → read
//! frames → reset → repeat.

use rill_bench::ripple_art;
use rill_core::{Cell, Command, GridDims};
use rill_engine::{Session, SessionConfig};
use rill_glyph::{GlyphFrame, RenderStyle};

fn main() {
    println!("=== Rill Lockstep Splash Example ===\n");

    let dims = GridDims::new(32, 12).unwrap();
    let mut config = SessionConfig::new(dims);
    config.art = Some(ripple_art(32, 12));
    config.style = RenderStyle::art_overlay();
    config.seed = 42;
    let mut session = Session::new(config).unwrap();

    println!("Backdrop before any ticks:");
    print_frame(&session.frame());

    // --- Episode 1: pointer drag with periodic taps ---
    println!("\nEpisode 1: 90 ticks with a sweeping pointer");
    for tick in 0..90u32 {
        // Drag the pointer left to right along the middle row,
        // tapping the center every 30 ticks.
        let x = 2 + (tick % 28) as i32;
        session.apply(Command::PointerMove {
            cell: Cell::new(x, 6),
        });
        if tick % 30 == 10 {
            session.apply(Command::Tap {
                cell: Cell::new(16, 6),
            });
        }

        let frame = session.tick();

        if tick % 15 == 0 || tick == 89 {
            let metrics = session.metrics();
            println!(
                "  tick {:>3}: max_density={:>8.3}, wet_cells={:>4}, step={:>5}μs, render={:>5}μs",
                frame.tick.0,
                max_density(&session),
                wet_cells(&session),
                metrics.step_us,
                metrics.render_us,
            );
        }
        if tick == 89 {
            println!("\nFrame at the end of episode 1:");
            print_frame(&frame);
        }
    }

    // --- Reset and Episode 2 ---
    println!("\nResetting session (tick counter and metrics restart)...");
    session.apply(Command::Reset);

    println!("Episode 2: 40 ticks without interaction (the backdrop holds)");
    for tick in 0..40u32 {
        let frame = session.tick();

        if tick % 10 == 0 || tick == 39 {
            println!(
                "  tick {:>3}: max_density={:>8.3}, wet_cells={:>4}",
                frame.tick.0,
                max_density(&session),
                wet_cells(&session),
            );
        }
        if tick == 39 {
            println!("\nFrame at the end of episode 2 (back on the art):");
            print_frame(&frame);
        }
    }

    let metrics = session.metrics();
    println!("\nFinal tick: {}", session.current_tick().0);
    println!("Ticks this episode: {}", metrics.ticks);
    println!("Commands this episode: {}", metrics.commands_applied);
    println!("Done.");
}

fn print_frame(frame: &GlyphFrame) {
    let width = frame.rows.first().map_or(0, |row| row.len());
    println!("  +{}+", "-".repeat(width));
    for row in &frame.rows {
        println!("  |{row}|");
    }
    println!("  +{}+", "-".repeat(width));
}

fn max_density(session: &Session) -> f32 {
    session
        .grid()
        .density()
        .iter()
        .cloned()
        .fold(0.0_f32, f32::max)
}

/// Count interior cells dense enough to override the art backdrop.
fn wet_cells(session: &Session) -> usize {
    let dims = session.dims();
    let density = session.grid().density();
    let mut count = 0;
    for y in 1..=dims.height() as i32 {
        for x in 1..=dims.width() as i32 {
            if density[dims.index(x, y)] > 1.0 {
                count += 1;
            }
        }
    }
    count
}
