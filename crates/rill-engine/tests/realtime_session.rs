//! Realtime driver lifecycle: spawning, command ingress, frame
//! publication, back-pressure, and shutdown.

use std::time::{Duration, Instant};

use rill_core::{Cell, Command, GridDims};
use rill_engine::{ConfigError, RealtimeSession, SessionConfig, SubmitError};
use rill_glyph::RenderStyle;
use rill_test_utils::fixtures::{BADGE_ART, BADGE_DIMS};

fn fast_config() -> SessionConfig {
    let mut cfg = SessionConfig::new(GridDims::new(8, 8).unwrap());
    cfg.tick_interval = Duration::from_millis(5);
    cfg
}

/// Poll until the published tick reaches `target` (generous timeout
/// for slow CI runners).
fn wait_for_tick(session: &RealtimeSession, target: u64) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while session.current_tick().0 < target {
        if Instant::now() > deadline {
            panic!("tick did not reach {target} within 5s");
        }
        std::thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn frames_advance_without_host_stepping() {
    let mut session = RealtimeSession::spawn(fast_config()).unwrap();
    wait_for_tick(&session, 3);

    let frame = session.latest_frame();
    assert!(frame.tick.0 >= 3);
    assert_eq!(frame.height(), 8);

    let recovered = session.stop().unwrap();
    assert!(recovered.current_tick().0 >= 3);
    assert!(recovered.metrics().ticks >= 3);
}

#[test]
fn initial_frame_is_published_before_the_first_tick() {
    let mut cfg = fast_config();
    // A long interval keeps the thread parked after tick 1, so the
    // tick-0 or tick-1 frame is what we observe.
    cfg.tick_interval = Duration::from_secs(30);
    let mut session = RealtimeSession::spawn(cfg).unwrap();

    let frame = session.latest_frame();
    assert!(frame.tick.0 <= 1);
    assert_eq!(frame.height(), 8);
    session.stop().unwrap();
}

#[test]
fn submitted_commands_reach_the_session() {
    let mut session = RealtimeSession::spawn(fast_config()).unwrap();
    wait_for_tick(&session, 1);

    session.submit(Command::AddDensity { cell: Cell::new(4, 4), amount: 300.0 }).unwrap();
    let submitted_at = session.current_tick().0;
    wait_for_tick(&session, submitted_at + 2);

    let recovered = session.stop().unwrap();
    assert_eq!(recovered.metrics().commands_applied, 1);
}

#[test]
fn full_queue_rejects_with_channel_full() {
    let mut cfg = fast_config();
    cfg.queue_capacity = 1;
    // Park the tick thread for a long time after its first tick so
    // nothing drains the queue while we overfill it.
    cfg.tick_interval = Duration::from_secs(30);
    let mut session = RealtimeSession::spawn(cfg).unwrap();
    wait_for_tick(&session, 1);

    let cell = Cell::new(2, 2);
    assert_eq!(session.submit(Command::Tap { cell }), Ok(()));
    assert_eq!(session.submit(Command::Tap { cell }), Err(SubmitError::ChannelFull));
    assert_eq!(session.rejected_submissions(), 1);

    // stop() must interrupt the 30s budget sleep promptly.
    let stop_start = Instant::now();
    session.stop().unwrap();
    assert!(stop_start.elapsed() < Duration::from_secs(5));
}

#[test]
fn submit_after_stop_fails_with_shutdown() {
    let mut session = RealtimeSession::spawn(fast_config()).unwrap();
    session.stop().unwrap();

    let err = session.submit(Command::Reset).unwrap_err();
    assert_eq!(err, SubmitError::Shutdown);
}

#[test]
fn second_stop_reports_recovery_failure() {
    let mut session = RealtimeSession::spawn(fast_config()).unwrap();
    session.stop().unwrap();
    assert!(matches!(session.stop(), Err(ConfigError::SessionRecoveryFailed)));
}

#[test]
fn drop_stops_the_tick_thread() {
    let session = RealtimeSession::spawn(fast_config()).unwrap();
    std::thread::sleep(Duration::from_millis(20));
    drop(session);
    // If this returns, the Drop shutdown joined cleanly.
}

#[test]
fn reset_command_returns_to_the_art_backdrop() {
    let (w, h) = BADGE_DIMS;
    let mut cfg = SessionConfig::new(GridDims::new(w, h).unwrap());
    cfg.art = Some(BADGE_ART.to_string());
    cfg.style = RenderStyle::art_overlay();
    cfg.tick_interval = Duration::from_millis(5);
    let mut session = RealtimeSession::spawn(cfg).unwrap();
    let art_rows = vec!["@##@".to_string(), "@%%@".to_string()];
    assert_eq!(session.latest_frame().rows, art_rows);

    session.submit(Command::Tap { cell: Cell::new(2, 1) }).unwrap();
    session.submit(Command::Reset).unwrap();
    let submitted_at = session.current_tick().0;
    wait_for_tick(&session, submitted_at + 2);

    // Both commands land in the same drain; the reset wins and the
    // backdrop densities stay below the overlay threshold.
    assert_eq!(session.latest_frame().rows, art_rows);
    session.stop().unwrap();
}
