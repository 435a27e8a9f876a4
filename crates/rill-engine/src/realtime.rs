//! Realtime session driver: a background thread ticking at a fixed
//! interval.
//!
//! The tick thread owns the [`Session`] exclusively (moved in via
//! `thread::spawn`), so there are no locks on the solver path.
//! Commands arrive through a bounded crossbeam channel drained at the
//! top of each tick, and the rendered frame is published under a
//! mutex beside an atomic tick counter, so readers can poll the tick
//! without touching the lock.
//!
//! ```text
//! Host thread(s)                 Tick thread
//!     |                              |
//!     |--submit(command)------------>| cmd_rx.try_recv() loop
//!     |   [cmd_tx: bounded(cap)]     | session.apply(command)
//!     |                              | session.tick()
//!     |<--latest_frame()/tick()------| publish frame + tick
//!     |                              | park_timeout(budget - elapsed)
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TrySendError};

use rill_core::{Command, TickId};
use rill_glyph::GlyphFrame;

use crate::config::{ConfigError, SessionConfig};
use crate::session::Session;

// ── Error types ──────────────────────────────────────────────────

/// Error submitting a command to the tick thread.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The tick thread has shut down.
    Shutdown,
    /// The command channel is full (back-pressure).
    ChannelFull,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shutdown => write!(f, "tick thread has shut down"),
            Self::ChannelFull => write!(f, "command channel full"),
        }
    }
}

impl std::error::Error for SubmitError {}

// ── Shared frame slot ────────────────────────────────────────────

/// The latest rendered frame, shared between the tick thread and any
/// number of readers.
struct FrameSlot {
    frame: Mutex<GlyphFrame>,
    /// Mirrors `frame.tick` so pollers can watch progress without
    /// taking the lock. Written after the frame itself.
    tick: AtomicU64,
}

// ── RealtimeSession ──────────────────────────────────────────────

/// A [`Session`] driven by a background thread at a fixed interval.
///
/// Spawned from a [`SessionConfig`] via
/// [`spawn()`](RealtimeSession::spawn). Hosts submit commands from
/// any thread and read the latest frame whenever they redraw; the
/// simulation advances on its own. [`stop()`](RealtimeSession::stop)
/// recovers the owned session for inspection or reuse, and dropping
/// the handle stops the thread.
pub struct RealtimeSession {
    slot: Arc<FrameSlot>,
    cmd_tx: Option<Sender<Command>>,
    shutdown_flag: Arc<AtomicBool>,
    rejected: Arc<AtomicU64>,
    tick_thread: Option<JoinHandle<Session>>,
}

impl RealtimeSession {
    /// Validate the config, build the session, and spawn the tick
    /// thread.
    ///
    /// The first frame (tick 0, the untouched base image) is
    /// published before the thread starts, so `latest_frame()` never
    /// observes an empty slot.
    pub fn spawn(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tick_interval = config.tick_interval;
        let queue_capacity = config.queue_capacity;
        let session = Session::new(config)?;

        let slot = Arc::new(FrameSlot {
            frame: Mutex::new(session.frame()),
            tick: AtomicU64::new(0),
        });
        let shutdown_flag = Arc::new(AtomicBool::new(false));
        let rejected = Arc::new(AtomicU64::new(0));
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(queue_capacity);

        let loop_slot = Arc::clone(&slot);
        let loop_shutdown = Arc::clone(&shutdown_flag);
        let loop_rejected = Arc::clone(&rejected);
        let tick_thread = thread::Builder::new()
            .name("rill-tick".into())
            .spawn(move || {
                TickLoop {
                    session,
                    slot: loop_slot,
                    cmd_rx,
                    shutdown_flag: loop_shutdown,
                    rejected: loop_rejected,
                    tick_interval,
                }
                .run()
            })
            .map_err(|e| ConfigError::ThreadSpawnFailed { reason: e.to_string() })?;

        Ok(Self {
            slot,
            cmd_tx: Some(cmd_tx),
            shutdown_flag,
            rejected,
            tick_thread: Some(tick_thread),
        })
    }

    /// Queue a command for the next tick.
    ///
    /// Non-blocking. Commands rejected with
    /// [`SubmitError::ChannelFull`] are dropped, not retried; the
    /// rejection is counted and surfaces in the session's metrics.
    pub fn submit(&self, command: Command) -> Result<(), SubmitError> {
        let cmd_tx = self.cmd_tx.as_ref().ok_or(SubmitError::Shutdown)?;
        cmd_tx.try_send(command).map_err(|e| match e {
            TrySendError::Full(_) => {
                self.rejected.fetch_add(1, Ordering::Relaxed);
                SubmitError::ChannelFull
            }
            TrySendError::Disconnected(_) => SubmitError::Shutdown,
        })
    }

    /// A clone of the most recently published frame.
    pub fn latest_frame(&self) -> GlyphFrame {
        self.slot.frame.lock().unwrap().clone()
    }

    /// Tick of the most recently published frame (lock-free read).
    pub fn current_tick(&self) -> TickId {
        TickId(self.slot.tick.load(Ordering::Acquire))
    }

    /// Cumulative number of submissions rejected with `ChannelFull`.
    pub fn rejected_submissions(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Stop the tick thread and recover the owned session.
    ///
    /// Wakes the thread out of its budget sleep, so stopping is
    /// prompt regardless of the tick interval. Subsequent `submit()`
    /// calls fail with [`SubmitError::Shutdown`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SessionRecoveryFailed`] if the thread
    /// was already stopped or panicked.
    pub fn stop(&mut self) -> Result<Session, ConfigError> {
        self.shutdown_flag.store(true, Ordering::Release);
        self.cmd_tx.take();
        let handle = self.tick_thread.take().ok_or(ConfigError::SessionRecoveryFailed)?;
        handle.thread().unpark();
        handle.join().map_err(|_| ConfigError::SessionRecoveryFailed)
    }
}

impl Drop for RealtimeSession {
    fn drop(&mut self) {
        if self.tick_thread.is_some() {
            let _ = self.stop();
        }
    }
}

// ── Tick loop ────────────────────────────────────────────────────

/// State owned by the tick thread's main loop.
struct TickLoop {
    session: Session,
    slot: Arc<FrameSlot>,
    cmd_rx: Receiver<Command>,
    shutdown_flag: Arc<AtomicBool>,
    rejected: Arc<AtomicU64>,
    tick_interval: Duration,
}

impl TickLoop {
    /// Run until the shutdown flag is set.
    ///
    /// Consumes self and returns the [`Session`] so the caller can
    /// recover it through the `JoinHandle`.
    fn run(mut self) -> Session {
        loop {
            if self.shutdown_flag.load(Ordering::Acquire) {
                break;
            }
            let tick_start = Instant::now();

            // 1. Drain the command channel.
            let drain_start = Instant::now();
            while let Ok(command) = self.cmd_rx.try_recv() {
                self.session.apply(command);
            }
            let command_us = drain_start.elapsed().as_micros() as u64;

            // 2. Step and render.
            let frame = self.session.tick();
            let metrics = self.session.metrics_mut();
            metrics.command_processing_us = command_us;
            metrics.queue_full_rejections = self.rejected.load(Ordering::Relaxed);

            // 3. Publish: frame first, then the tick mirror.
            let tick = frame.tick;
            *self.slot.frame.lock().unwrap() = frame;
            self.slot.tick.store(tick.0, Ordering::Release);

            // 4. Sleep out the remaining budget. park_timeout instead
            //    of sleep so stop() can interrupt via unpark.
            let deadline = tick_start + self.tick_interval;
            loop {
                if self.shutdown_flag.load(Ordering::Acquire) {
                    break;
                }
                let Some(remaining) = deadline.checked_duration_since(Instant::now()) else {
                    break;
                };
                thread::park_timeout(remaining);
            }
        }
        self.session
    }
}
